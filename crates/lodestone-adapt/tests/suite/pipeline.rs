use lodestone_adapt::{merge_and_adapt, AdaptError};
use lodestone_metadata::{ClassMetadata, FieldMetadata, MetadataError, Named, SourceMetadata};
use lodestone_remap::RemapError;
use pretty_assertions::assert_eq;

fn doc(classes: Vec<ClassMetadata>) -> SourceMetadata {
    SourceMetadata {
        minecraft_version: "1.17.1".into(),
        classes,
        ..SourceMetadata::default()
    }
}

#[test]
fn field_descriptor_resolves_after_merge() {
    let left = doc(vec![ClassMetadata {
        name: Named::resolved("a", "com/Foo"),
        ..ClassMetadata::default()
    }]);
    let right = doc(vec![ClassMetadata {
        name: Named::obfuscated("a"),
        fields: vec![FieldMetadata {
            name: Named::obfuscated("f"),
            descriptor: Named::obfuscated("La;"),
            ..FieldMetadata::default()
        }],
        ..ClassMetadata::default()
    }]);

    let out = merge_and_adapt(&left, &right).unwrap();
    let class = &out.classes[0];
    assert_eq!(class.name, Named::resolved("a", "com/Foo"));
    assert_eq!(class.fields[0].descriptor, Named::resolved("La;", "Lcom/Foo;"));
    assert_eq!(class.fields[0].descriptor.official_name(), Some("Lcom/Foo;"));
}

#[test]
fn documents_round_trip_through_json() {
    let left = SourceMetadata::from_json_str(
        r#"{
            "specVersion": "1.0.0",
            "minecraftVersion": "1.17.1",
            "classes": [{
                "name": {"obfuscated": "a", "mojang": "com/Foo"},
                "innerClasses": [{"name": {"obfuscated": "a$a", "official": "com/Foo$Entry"}}],
                "methods": [{
                    "owner": {"obfuscated": "a", "official": "com/Foo"},
                    "name": {"obfuscated": "a", "official": "entries"},
                    "descriptor": {"obfuscated": "()Ljava/util/List;"}
                }]
            }]
        }"#,
    )
    .unwrap();
    let right = SourceMetadata::from_json_str(
        r#"{
            "minecraftVersion": "1.17.1",
            "classes": [{
                "name": {"obfuscated": "a"},
                "superName": {"obfuscated": "java/lang/Object"},
                "securitySpecification": 33,
                "innerClasses": [{"name": {"obfuscated": "a$a"}, "securitySpecification": 9}],
                "methods": [{
                    "owner": {"obfuscated": "a"},
                    "name": {"obfuscated": "a"},
                    "descriptor": {"obfuscated": "()Ljava/util/List;"},
                    "signature": {"obfuscated": "()Ljava/util/List<La$a;>;"},
                    "securitySpecification": 1
                }]
            }]
        }"#,
    )
    .unwrap();

    let out = merge_and_adapt(&left, &right).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out.to_json_string(false).unwrap()).unwrap();

    assert_eq!(json["classes"][0]["securitySpecification"], 33);
    assert_eq!(json["classes"][0]["innerClasses"][0]["securitySpecification"], 9);
    assert_eq!(
        json["classes"][0]["methods"][0]["signature"],
        serde_json::json!({
            "obfuscated": "()Ljava/util/List<La$a;>;",
            "official": "()Ljava/util/List<Lcom/Foo$Entry;>;"
        })
    );
    assert_eq!(
        json["classes"][0]["methods"][0]["name"],
        serde_json::json!({"obfuscated": "a", "official": "entries"})
    );
    assert_eq!(out.stats().unresolved, 0);
}

#[test]
fn inner_class_signatures_use_mapped_simple_names() {
    let left = doc(vec![ClassMetadata {
        name: Named::resolved("a", "com/Foo"),
        inner_classes: vec![ClassMetadata {
            name: Named::resolved("a$a", "com/Foo$Node"),
            ..ClassMetadata::default()
        }],
        ..ClassMetadata::default()
    }]);
    let right = doc(vec![ClassMetadata {
        name: Named::obfuscated("a"),
        fields: vec![FieldMetadata {
            owner: Named::obfuscated("a"),
            name: Named::obfuscated("b"),
            descriptor: Named::obfuscated("La$a;"),
            signature: Named::obfuscated("La<TT;>.a;"),
            ..FieldMetadata::default()
        }],
        ..ClassMetadata::default()
    }]);

    let out = merge_and_adapt(&left, &right).unwrap();
    let field = &out.classes[0].fields[0];
    assert_eq!(field.descriptor.official_name(), Some("Lcom/Foo$Node;"));
    assert_eq!(field.signature.official_name(), Some("Lcom/Foo<TT;>.Node;"));
}

#[test]
fn malformed_signature_fails_the_whole_run() {
    let left = doc(vec![ClassMetadata {
        name: Named::resolved("a", "com/Foo"),
        signature: Named::obfuscated("<T:La;"),
        ..ClassMetadata::default()
    }]);

    let err = merge_and_adapt(&left, &doc(Vec::new())).unwrap_err();
    assert!(matches!(err, AdaptError::Remap(RemapError::InvalidSignature(_))));
}

#[test]
fn merge_failures_surface_as_metadata_errors() {
    let right = doc(vec![ClassMetadata {
        name: Named::official("com/Foo"),
        ..ClassMetadata::default()
    }]);

    let err = merge_and_adapt(&doc(Vec::new()), &right).unwrap_err();
    assert!(matches!(
        err,
        AdaptError::Metadata(MetadataError::MissingJoinKey { .. })
    ));
}
