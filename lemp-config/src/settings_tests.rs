mod document_tests {
    use crate::settings::{Protocol, Settings};

    #[test]
    fn parses_a_full_document() {
        let json = r#"{
            "name": "app",
            "hostname": "app",
            "ip": "192.168.10.10",
            "box": "starcorp/lemp",
            "version": ">= 0.0.2",
            "memory": "2048",
            "cpus": 2,
            "gui": true,
            "default_ssh_port": 2222,
            "networks": [
                {"type": "private_network", "ip": "10.0.0.5"}
            ],
            "ports": [
                {"guest": 80, "host": 8000}
            ],
            "authorize": ["~/.ssh/id_rsa.pub"],
            "keys": ["~/.ssh/id_rsa"],
            "tokens": ["secret"],
            "folders": [
                {"map": "/src/app", "to": "/home/vagrant/code", "type": "nfs"}
            ],
            "sites": [
                {"map": "app.test", "to": "/home/vagrant/code/public", "port": 8080}
            ],
            "variables": [
                {"key": "APP_ENV", "value": "local"}
            ],
            "databases": ["app"],
            "blackfire": [
                {"id": "i", "token": "t", "client-id": "ci", "client-token": "ct"}
            ]
        }"#;

        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.name.as_deref(), Some("app"));
        assert_eq!(settings.box_name.as_deref(), Some("starcorp/lemp"));
        assert_eq!(settings.memory.as_deref(), Some("2048"));
        assert_eq!(settings.cpus.as_deref(), Some("2"));
        assert_eq!(settings.gui, Some(true));
        assert_eq!(settings.default_ssh_port, Some(2222));
        assert_eq!(settings.networks.len(), 1);
        assert_eq!(settings.ports[0].guest, 80);
        assert_eq!(settings.ports[0].protocol, Protocol::Tcp);
        assert_eq!(settings.authorize.as_ref().unwrap().len(), 1);
        assert_eq!(settings.sites[0].port.as_deref(), Some("8080"));
        assert_eq!(settings.blackfire.as_ref().unwrap()[0].client_id, "ci");
    }

    #[test]
    fn accepts_legacy_port_field_names() {
        let json = r#"{"ports": [{"to": 3000, "send": 33000, "protocol": "udp"}]}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.ports[0].guest, 3000);
        assert_eq!(settings.ports[0].host, 33000);
        assert_eq!(settings.ports[0].protocol, Protocol::Udp);
    }

    #[test]
    fn declared_but_empty_lists_survive_parsing() {
        let json = r#"{"authorize": [], "keys": []}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(settings.authorize.as_ref().is_some_and(|a| a.is_empty()));
        assert!(settings.keys.as_ref().is_some_and(|k| k.is_empty()));
    }

    #[test]
    fn unknown_keys_round_trip() {
        let json = r#"{"message": "hold on to this", "ip": "10.1.1.1"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        let out = settings.to_json().unwrap();
        assert!(out.contains("\"message\": \"hold on to this\""));
    }
}

mod loader_tests {
    use crate::settings::Settings;
    use lemp_core::error::LempError;
    use tempfile::TempDir;

    #[test]
    fn from_file_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("Server.json");
        match Settings::from_file(&missing) {
            Err(LempError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Server.json");

        let mut settings = Settings::default();
        settings.name = Some("app".to_string());
        settings.ip = Some("192.168.10.10".to_string());
        settings.save(&path).unwrap();

        let reloaded = Settings::from_file(&path).unwrap();
        assert_eq!(reloaded.name.as_deref(), Some("app"));
        assert_eq!(reloaded.ip.as_deref(), Some("192.168.10.10"));
    }

    #[test]
    fn malformed_json_propagates_as_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Server.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Settings::from_file(&path),
            Err(LempError::Serialization(_))
        ));
    }
}

mod mutator_tests {
    use std::path::Path;

    use crate::init::{DEFAULT_FOLDER_TO, DEFAULT_SITE_TO};
    use crate::settings::Settings;

    #[test]
    fn overrides_apply_only_when_non_empty() {
        let mut settings = Settings::default();
        settings.name = Some("template-name".to_string());

        settings.update_name(Some("")).update_hostname(None);
        assert_eq!(settings.name.as_deref(), Some("template-name"));
        assert_eq!(settings.hostname, None);

        settings
            .update_name(Some("custom"))
            .update_hostname(Some("host"))
            .update_ip_address(Some("127.0.0.1"));
        assert_eq!(settings.name.as_deref(), Some("custom"));
        assert_eq!(settings.hostname.as_deref(), Some("host"));
        assert_eq!(settings.ip.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn default_site_entry_has_exactly_map_and_to() {
        let mut settings = Settings::default();
        settings.configure_sites("My Project", "my-project");

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json["sites"][0],
            serde_json::json!({
                "map": "my-project.test",
                "to": DEFAULT_SITE_TO,
            })
        );
    }

    #[test]
    fn default_shared_folder_maps_the_project_directory() {
        let mut settings = Settings::default();
        settings.configure_shared_folders(Path::new("/src/my-project"), "my-project");

        assert_eq!(settings.folders[0].map, Path::new("/src/my-project"));
        assert_eq!(settings.folders[0].to, DEFAULT_FOLDER_TO);
    }
}

mod resolution_tests {
    use crate::defaults::{
        AUTONETWORK, DEFAULT_BOX, DEFAULT_HOSTNAME, DEFAULT_IP, DEFAULT_MEMORY, DEFAULT_NAME,
        DEFAULT_NETMASK,
    };
    use crate::settings::{Folder, Network, Settings, Site};

    fn site(r#type: Option<&str>) -> Site {
        Site {
            map: "app.test".to_string(),
            to: Some("/home/vagrant/code/public".to_string()),
            r#type: r#type.map(String::from),
            port: None,
            ssl: None,
            php: None,
            params: Vec::new(),
            index: None,
            store: None,
        }
    }

    fn folder(r#type: Option<&str>, mount_options: Option<Vec<String>>) -> Folder {
        Folder {
            map: "/src/app".into(),
            to: "/home/vagrant/code".to_string(),
            r#type: r#type.map(String::from),
            options: None,
            mount_options,
        }
    }

    #[test]
    fn empty_document_resolves_to_the_fixed_defaults() {
        let resolved = Settings::default().resolved();
        assert_eq!(resolved.name, DEFAULT_NAME);
        assert_eq!(resolved.box_name, DEFAULT_BOX);
        assert_eq!(resolved.hostname, DEFAULT_HOSTNAME);
        assert_eq!(resolved.ip, DEFAULT_IP);
        assert_eq!(resolved.memory, DEFAULT_MEMORY);
        assert_eq!(resolved.cpus, "1");
        assert_eq!(resolved.natdnshostresolver, "on");
        assert!(!resolved.gui);
        assert!(resolved.use_default_ports);
        assert!(resolved.blackfire.is_empty());
    }

    #[test]
    fn autonetwork_sentinel_is_preserved() {
        let mut settings = Settings::default();
        settings.ip = Some(AUTONETWORK.to_string());
        assert_eq!(settings.resolved().ip, AUTONETWORK);
    }

    #[test]
    fn site_defaults_depend_on_type() {
        let mut settings = Settings::default();
        settings.sites = vec![site(None), site(Some("angular")), site(Some("symfony"))];

        let resolved = settings.resolved();
        assert_eq!(resolved.sites[0].r#type, "basic");
        assert_eq!(resolved.sites[0].port, "80");
        assert_eq!(resolved.sites[0].ssl, "443");
        assert_eq!(resolved.sites[0].php, "7.2");
        assert_eq!(resolved.sites[0].index, "index");
        assert_eq!(resolved.sites[0].store, "mx");

        // Angular dev server listens on its own port.
        assert_eq!(resolved.sites[1].port, "4200");

        // Type normalization is the configurator's concern, not resolution's.
        assert_eq!(resolved.sites[2].r#type, "symfony");
    }

    #[test]
    fn folder_mount_options_follow_the_folder_type() {
        let mut settings = Settings::default();
        settings.folders = vec![
            folder(Some("nfs"), None),
            folder(Some("smb"), None),
            folder(None, None),
            folder(Some("nfs"), Some(vec!["rw".to_string()])),
        ];

        let resolved = settings.resolved();
        assert_eq!(resolved.folders[0].mount_options, ["actimeo=1", "nolock"]);
        assert_eq!(resolved.folders[1].mount_options, ["vers=3.02", "mfsymlinks"]);
        assert!(resolved.folders[2].mount_options.is_empty());
        assert_eq!(resolved.folders[3].mount_options, ["rw"]);
    }

    #[test]
    fn additional_networks_get_the_default_netmask() {
        let mut settings = Settings::default();
        settings.networks = vec![Network {
            r#type: "public_network".to_string(),
            ip: None,
            bridge: Some("en0".to_string()),
            netmask: None,
        }];

        let resolved = settings.resolved();
        assert_eq!(resolved.networks[0].netmask, DEFAULT_NETMASK);
        assert_eq!(resolved.networks[0].bridge.as_deref(), Some("en0"));
    }

    #[test]
    fn explicit_default_ports_false_disables_the_table() {
        let mut settings = Settings::default();
        settings.default_ports = Some(false);
        assert!(!settings.resolved().use_default_ports);
    }
}
