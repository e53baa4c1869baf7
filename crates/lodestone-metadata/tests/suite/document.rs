use lodestone_metadata::{
    BouncingTargetMetadata, ClassMetadata, MethodMetadata, MethodReference, Named,
    SourceMetadata, SpecVersion,
};
use pretty_assertions::assert_eq;

const PROGUARD_STYLE: &str = r#"{
  "specVersion": "1.0.0",
  "minecraftVersion": "1.17.1",
  "classes": [
    {
      "name": { "obfuscated": "a" },
      "superName": { "obfuscated": "java/lang/Object" },
      "interfaces": [ { "obfuscated": "b" } ],
      "securitySpecification": 33,
      "methods": [
        {
          "owner": { "obfuscated": "a" },
          "name": { "obfuscated": "a" },
          "descriptor": { "obfuscated": "(Lb;)V" },
          "securitySpecification": 1
        },
        {
          "owner": { "obfuscated": "a" },
          "name": { "obfuscated": "b" },
          "descriptor": { "obfuscated": "(Ljava/lang/Object;)V" },
          "securitySpecification": 4161,
          "bouncingTarget": {
            "target": {
              "owner": { "obfuscated": "a" },
              "name": { "obfuscated": "a" },
              "descriptor": { "obfuscated": "(Lb;)V" }
            }
          }
        }
      ]
    }
  ]
}"#;

#[test]
fn reads_structure_rich_document() {
    let metadata = SourceMetadata::from_json_str(PROGUARD_STYLE).unwrap();
    assert_eq!(metadata.spec_version, SpecVersion::new(1, 0, 0));
    assert_eq!(metadata.minecraft_version, "1.17.1");

    let class = &metadata.classes[0];
    assert_eq!(class.name, Named::obfuscated("a"));
    assert_eq!(class.signature, Named::Empty);
    assert_eq!(class.interfaces, vec![Named::obfuscated("b")]);
    assert_eq!(class.security_specification, 33);

    let bridge = &class.methods[1];
    assert_eq!(
        bridge.bouncing_target,
        Some(BouncingTargetMetadata {
            target: Some(MethodReference {
                owner: Named::obfuscated("a"),
                name: Named::obfuscated("a"),
                descriptor: Named::obfuscated("(Lb;)V"),
                signature: Named::Empty,
            }),
            owner: None,
        })
    );

    let stats = metadata.stats();
    assert_eq!(stats.classes, 1);
    assert_eq!(stats.methods, 2);
    assert_eq!(stats.bouncers, 1);
}

#[test]
fn written_document_omits_unknown_names() {
    let metadata = SourceMetadata {
        spec_version: SpecVersion::CURRENT,
        minecraft_version: "1.17.1".into(),
        classes: vec![ClassMetadata {
            name: Named::resolved("a", "com/Foo"),
            methods: vec![MethodMetadata {
                owner: Named::resolved("a", "com/Foo"),
                name: Named::obfuscated("a"),
                descriptor: Named::resolved("()V", "()V"),
                ..MethodMetadata::default()
            }],
            ..ClassMetadata::default()
        }],
    };

    let json = metadata.to_json_string(false).unwrap();
    assert!(!json.contains("superName"), "{json}");
    assert!(!json.contains("bouncingTarget"), "{json}");
    assert!(!json.contains("\"signature\""), "{json}");

    assert_eq!(SourceMetadata::from_json_str(&json).unwrap(), metadata);
}

#[test]
fn file_round_trip_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/merged.json");

    let metadata = SourceMetadata::from_json_str(PROGUARD_STYLE).unwrap();
    metadata.write_to_path(&path, true).unwrap();

    let reread = SourceMetadata::read_from_path(&path).unwrap();
    assert_eq!(reread, metadata);
}

#[test]
fn malformed_spec_version_is_rejected() {
    let err = SourceMetadata::from_json_str(r#"{"specVersion":"one","classes":[]}"#).unwrap_err();
    assert!(err.to_string().contains("one"), "{err}");
}
