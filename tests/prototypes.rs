use std::io::Write;

use deep_fry::ecs::spawn;
use deep_fry::ecs::test_helpers::fry;
use deep_fry::ecs::{Appearance, KitchenConfig, build_kitchen_app_with};
use deep_fry::{FryCommand, PrototypeError, PrototypeRegistry};

#[test]
fn registry_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "LightlyFried", "visual": "light"}},
            {{"id": "DeepFried", "visual": "deep"}}
        ]"#
    )
    .unwrap();

    let registry = PrototypeRegistry::load_from_file(file.path()).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.index("DeepFried").unwrap().visual, "deep");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PrototypeRegistry::load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, PrototypeError::Io(_)));
}

#[test]
fn app_uses_supplied_registry() {
    let registry =
        PrototypeRegistry::from_json_str(r#"[{"id": "Golden", "visual": "golden"}]"#).unwrap();
    let mut app = build_kitchen_app_with(KitchenConfig::default(), registry);
    let item = spawn::spawn_item(app.world_mut(), 1.0, &[]);

    fry(
        &mut app,
        [
            FryCommand::MakeCrispy {
                item,
                crispiness: "Crispy".to_string(),
            },
            FryCommand::MakeCrispy {
                item,
                crispiness: "Golden".to_string(),
            },
        ],
    );

    let appearance = app.world().get::<Appearance>(item).unwrap();
    assert!(!appearance.flag("crispy"));
    assert!(appearance.flag("golden"));
}
