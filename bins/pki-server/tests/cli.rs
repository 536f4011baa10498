//! End-to-end tests for the pki-server http-connector commands.
//!
//! Each test builds a throwaway instance root containing a single
//! `pki-tomcat` instance and runs the binary against it.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SERVER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Server port="8005" shutdown="SHUTDOWN">
    <Service name="Catalina">
        <Connector name="Unsecure" port="8080" protocol="HTTP/1.1" redirectPort="8443"/>
        <Connector name="Secure" port="8443" protocol="org.dogtagpki.tomcat.Http11NioProtocol"
                   SSLEnabled="true" scheme="https" secure="true"
                   sslImplementationName="org.apache.tomcat.util.net.jss.JSSImplementation">
            <SSLHostConfig sslProtocol="TLS" certificateVerification="optional">
                <Certificate certificateKeystoreType="pkcs11" certificateKeyAlias="sslserver"/>
            </SSLHostConfig>
            <SSLHostConfig hostName="ca.example.com">
                <Certificate type="RSA" certificateFile="/etc/pki/ca.crt" certificateKeyFile="/etc/pki/ca.key"/>
                <Certificate type="EC" certificateFile="/etc/pki/ca-ec.crt"/>
            </SSLHostConfig>
        </Connector>
        <Connector name="AJP" port="8009" protocol="AJP/1.3"/>
        <Engine name="Catalina" defaultHost="localhost"/>
    </Service>
</Server>
"#;

struct TestInstance {
    root: TempDir,
}

impl TestInstance {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let conf = root.path().join("pki-tomcat").join("conf");
        fs::create_dir_all(&conf).unwrap();
        fs::write(conf.join("server.xml"), SERVER_XML).unwrap();
        Self { root }
    }

    fn root(&self) -> &Path {
        self.root.path()
    }

    fn server_xml(&self) -> PathBuf {
        self.root().join("pki-tomcat/conf/server.xml")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pki-server"));
        cmd.env("PKI_INSTANCE_ROOT", self.root())
            .env_remove("RUST_LOG")
            .arg("http-connector");
        cmd
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).assert().success();
        String::from_utf8(output.get_output().stdout.clone()).unwrap()
    }
}

mod global_flags {
    use super::*;

    #[test]
    fn test_help() {
        Command::new(env!("CARGO_BIN_EXE_pki-server"))
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("PKI server administration tool"));
    }

    #[test]
    fn test_connector_help_lists_subcommands() {
        Command::new(env!("CARGO_BIN_EXE_pki-server"))
            .args(["http-connector", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("add"))
            .stdout(predicate::str::contains("del"))
            .stdout(predicate::str::contains("find"))
            .stdout(predicate::str::contains("show"))
            .stdout(predicate::str::contains("mod"))
            .stdout(predicate::str::contains("host"))
            .stdout(predicate::str::contains("cert"));
    }

    #[test]
    fn test_invalid_instance() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["find", "-i", "missing"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("ERROR: Invalid instance: missing"));
    }

    #[test]
    fn test_instance_root_flag() {
        let instance = TestInstance::new();
        Command::new(env!("CARGO_BIN_EXE_pki-server"))
            .env_remove("PKI_INSTANCE_ROOT")
            .arg("--instance-root")
            .arg(instance.root())
            .args(["http-connector", "show", "Unsecure"])
            .assert()
            .success()
            .stdout(predicate::str::contains("  Port: 8080"));
    }

    #[test]
    fn test_rust_log_raises_level() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .env("RUST_LOG", "debug")
            .arg("find")
            .assert()
            .success()
            .stderr(predicate::str::contains("Loading"));
    }

    #[test]
    fn test_quiet_by_default() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .arg("find")
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}

mod add_command {
    use super::*;

    #[test]
    fn test_add_prints_connector() {
        let instance = TestInstance::new();
        let out = instance.stdout(&["add", "Extra", "--port", "9443", "--scheme", "https"]);
        assert_eq!(out, "  Connector ID: Extra\n  Port: 9443\n  Scheme: https\n");
    }

    #[test]
    fn test_add_then_show() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["add", "Extra", "--port", "8444", "--sslEnabled", "true"])
            .assert()
            .success();

        let out = instance.stdout(&["show", "Extra"]);
        assert!(out.lines().any(|l| l == "  Port: 8444"));
        assert!(out.contains("  SSL Enabled: true"));
        assert!(!out.contains("SSL Implementation"));
    }

    #[test]
    fn test_add_empty_value_is_not_stored() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["add", "Extra", "--port", "8444", "--protocol", ""])
            .assert()
            .success()
            .stdout(predicate::str::contains("Protocol").not());

        let xml = fs::read_to_string(instance.server_xml()).unwrap();
        assert!(!xml.contains(r#"protocol="""#));
    }

    #[test]
    fn test_add_duplicate_fails() {
        let instance = TestInstance::new();
        let before = fs::read_to_string(instance.server_xml()).unwrap();

        instance
            .cmd()
            .args(["add", "Secure", "--port", "9443"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Connector already exists: Secure"));

        assert_eq!(fs::read_to_string(instance.server_xml()).unwrap(), before);
    }

    #[test]
    fn test_add_requires_port() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["add", "Extra"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--port"));
    }

    #[test]
    fn test_add_requires_id() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["add", "--port", "9443"])
            .assert()
            .failure();
    }
}

mod del_command {
    use super::*;

    #[test]
    fn test_del_is_silent() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["del", "AJP"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        instance
            .cmd()
            .args(["show", "AJP"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Connector not found: AJP"));
    }

    #[test]
    fn test_del_missing_fails() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["del", "Missing"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Connector not found: Missing"));
    }
}

mod find_command {
    use super::*;

    #[test]
    fn test_find_lists_all_connectors() {
        let instance = TestInstance::new();
        let out = instance.stdout(&["find"]);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "3 entries matched");
        assert_eq!(lines[1], "  Connector ID: Unsecure");
        assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 2);
        assert!(!out.ends_with("\n\n"));

        let blocks: Vec<&str> = out
            .trim_start_matches("3 entries matched\n")
            .split("\n\n")
            .collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[1].starts_with("  Connector ID: Secure"));
        assert!(blocks[2].starts_with("  Connector ID: AJP"));
    }

    #[test]
    fn test_find_empty_service() {
        let instance = TestInstance::new();
        fs::write(
            instance.server_xml(),
            r#"<Server><Service name="Catalina"/></Server>"#,
        )
        .unwrap();

        let out = instance.stdout(&["find"]);
        assert_eq!(out, "0 entries matched\n");
    }

    #[test]
    fn test_find_json() {
        let instance = TestInstance::new();
        let out = instance.stdout(&["find", "--json"]);
        assert!(out.starts_with('['));
        assert!(out.contains(r#""name":"Unsecure""#));
        assert!(out.contains(r#""port":"8443""#));
    }

    #[test]
    fn test_find_does_not_rewrite_file() {
        let instance = TestInstance::new();
        instance.stdout(&["find"]);
        assert_eq!(fs::read_to_string(instance.server_xml()).unwrap(), SERVER_XML);
    }
}

mod show_command {
    use super::*;

    #[test]
    fn test_show_connector() {
        let instance = TestInstance::new();
        let out = instance.stdout(&["show", "Secure"]);
        assert_eq!(
            out,
            "  Connector ID: Secure\n\
             \x20 Port: 8443\n\
             \x20 Protocol: org.dogtagpki.tomcat.Http11NioProtocol\n\
             \x20 Scheme: https\n\
             \x20 Secure: true\n\
             \x20 SSL Enabled: true\n\
             \x20 SSL Implementation: org.apache.tomcat.util.net.jss.JSSImplementation\n"
        );
    }

    #[test]
    fn test_show_missing_fails() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["show", "Missing"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Connector not found: Missing"));
    }
}

mod mod_command {
    use super::*;

    #[test]
    fn test_mod_jsse() {
        let instance = TestInstance::new();
        let out = instance.stdout(&[
            "mod",
            "Secure",
            "--type",
            "JSSE",
            "--keystore-file",
            "ks.p12",
            "--keystore-password-file",
            "ks.pass",
        ]);
        assert!(out.contains("  Protocol: org.dogtagpki.tomcat.Http11NioProtocol\n"));
        assert!(out.contains("  Keystore File: ks.p12\n"));
        assert!(out.contains("  Keystore Password File: ks.pass\n"));
        assert!(out.contains("  Trust Manager: org.dogtagpki.tomcat.PKITrustManager\n"));
        assert!(!out.contains("SSL Implementation"));

        let xml = fs::read_to_string(instance.server_xml()).unwrap();
        assert!(xml.contains(r#"keystoreFile="ks.p12""#));
        assert!(xml.contains(r#"keystoreType="pkcs12""#));
        assert!(xml.contains(r#"keyAlias="sslserver""#));
        assert!(!xml.contains("sslImplementationName"));
    }

    #[test]
    fn test_mod_jsse_json_shows_full_profile() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["mod", "Secure", "--type", "JSSE", "--keystore-file", "ks.p12"])
            .assert()
            .success();

        let out = instance.stdout(&["show", "Secure", "--json"]);
        assert!(out.contains(r#""keystoreType":"pkcs12""#));
        assert!(out.contains(r#""keyAlias":"sslserver""#));
        assert!(!out.contains("sslImplementationName"));

        let out = instance.stdout(&["show", "Unsecure", "--json"]);
        assert!(out.contains(r#""redirectPort":"8443""#));
    }

    #[test]
    fn test_mod_defaults_to_jss() {
        let instance = TestInstance::new();
        instance.stdout(&["mod", "Secure", "--type", "JSSE", "--keystore-file", "ks.p12"]);

        let out = instance.stdout(&[
            "mod",
            "Secure",
            "--nss-database-dir",
            "/var/lib/pki/pki-tomcat/alias",
            "--nss-password-file",
            "/var/lib/pki/pki-tomcat/conf/password.conf",
        ]);
        assert!(out.contains("  Protocol: org.apache.coyote.http11.Http11Protocol\n"));
        assert!(out.contains("  SSL Implementation: org.apache.tomcat.util.net.jss.JSSImplementation\n"));
        assert!(out.contains("  NSS Database Directory: /var/lib/pki/pki-tomcat/alias\n"));
        assert!(out.contains("  NSS Password Class: org.apache.tomcat.util.net.jss.PlainPasswordFile\n"));
        assert!(!out.contains("Keystore File"));
        assert!(!out.contains("Trust Manager"));

        let xml = fs::read_to_string(instance.server_xml()).unwrap();
        assert!(!xml.contains("keystoreType"));
        assert!(!xml.contains("keyAlias"));
    }

    #[test]
    fn test_mod_invalid_type_leaves_file_unchanged() {
        let instance = TestInstance::new();
        let before = fs::read_to_string(instance.server_xml()).unwrap();

        instance
            .cmd()
            .args(["mod", "Secure", "--type", "BOGUS"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Invalid connector type: BOGUS"));

        assert_eq!(fs::read_to_string(instance.server_xml()).unwrap(), before);
    }

    #[test]
    fn test_mod_missing_connector() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["mod", "Missing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Connector not found: Missing"));
    }
}

mod host_command {
    use super::*;

    #[test]
    fn test_host_find() {
        let instance = TestInstance::new();
        let out = instance.stdout(&["host", "find", "Secure"]);
        assert_eq!(
            out,
            "2 entries matched\n\
             \x20 Hostname: _default_\n\
             \x20 SSL Protocol: TLS\n\
             \x20 Certificate Verification: optional\n\
             \n\
             \x20 Hostname: ca.example.com\n"
        );
    }

    #[test]
    fn test_host_find_without_hosts() {
        let instance = TestInstance::new();
        let out = instance.stdout(&["host", "find", "Unsecure"]);
        assert_eq!(out, "0 entries matched\n");
    }

    #[test]
    fn test_host_find_missing_connector() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["host", "find", "Missing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Connector not found: Missing"));
    }

    #[test]
    fn test_host_find_requires_connector() {
        let instance = TestInstance::new();
        instance.cmd().args(["host", "find"]).assert().failure();
    }
}

mod cert_command {
    use super::*;

    #[test]
    fn test_cert_find() {
        let instance = TestInstance::new();
        let out = instance.stdout(&["cert", "find", "Secure", "ca.example.com"]);
        assert_eq!(
            out,
            "2 entries matched\n\
             \x20 Type: RSA\n\
             \x20 Certificate File: /etc/pki/ca.crt\n\
             \x20 Key File: /etc/pki/ca.key\n\
             \n\
             \x20 Type: EC\n\
             \x20 Certificate File: /etc/pki/ca-ec.crt\n"
        );
    }

    #[test]
    fn test_cert_find_default_host() {
        let instance = TestInstance::new();
        let out = instance.stdout(&["cert", "find", "Secure", "_default_"]);
        assert_eq!(
            out,
            "1 entries matched\n\
             \x20 Type: UNDEFINED\n\
             \x20 Key Alias: sslserver\n\
             \x20 Keystore Type: pkcs11\n"
        );
    }

    #[test]
    fn test_cert_find_unknown_host() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["cert", "find", "Secure", "kra.example.com"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("SSL host not found: kra.example.com"));
    }

    #[test]
    fn test_cert_find_requires_hostname() {
        let instance = TestInstance::new();
        instance
            .cmd()
            .args(["cert", "find", "Secure"])
            .assert()
            .failure();
    }
}
