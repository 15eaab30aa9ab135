//! Scene descriptions build chains equivalent to hand-built ones

use daub_core::actions::{
    Border, Divide, DropShadow, Fill, Inset, Shape, ShapeGenerator, Split, Text,
};
use daub_core::{render, Chain, SceneError, SceneSpec};
use daub_paint::{AttributedText, Color, RecordingContext, Rect, RectEdge, Shadow, TextStyle};

const R: Rect = Rect::new(0.0, 0.0, 320.0, 48.0);

const TOOLBAR: &str = r##"
name = "toolbar"

[[actions]]
kind = "inset"
all = 4

[[actions]]
kind = "divide"
amount = 40
padding = 8
edge = "min_x"

[[actions.slice]]
kind = "shape"
shape = { type = "ellipse" }

[[actions.slice]]
kind = "fill"
color = "#ff0000"

[[actions]]
kind = "split"

[[actions.first]]
kind = "shadow"
offset_y = 2
blur_radius = 4
color = { r = 0.0, g = 0.0, b = 0.0, a = 0.25 }

[[actions.first]]
kind = "shape"
shape = { type = "rounded_rect", radius = 6 }

[[actions.first]]
kind = "fill"
color = "#ffffff"

[[actions]]
kind = "border"
color = "#000000"
width = 1

[[actions]]
kind = "text"
text = "Save"
style = { size = 14 }
"##;

fn hand_built() -> Chain {
    let slice = Chain::new(Shape::new(ShapeGenerator::Ellipse))
        .then(Fill::new(Color::RED));
    let first = Chain::new(DropShadow::new(Shadow::new(
        0.0,
        2.0,
        4.0,
        Color::new(0.0, 0.0, 0.0, 0.25),
    )))
    .then(Shape::rounded(6.0))
    .then(Fill::new(Color::WHITE));

    Chain::new(Inset::uniform(4.0))
        .then(
            Divide::new(40.0, RectEdge::MinX)
                .with_padding(8.0)
                .with_slice(slice),
        )
        .then(Split::new(first))
        .then(Border::new(Color::BLACK, 1.0))
        .then(Text::new(AttributedText::plain("Save", TextStyle::new(14.0))))
}

#[test]
fn test_toml_scene_matches_hand_built_chain() {
    let scene: SceneSpec = toml::from_str(TOOLBAR).unwrap();
    assert_eq!(scene.name.as_deref(), Some("toolbar"));

    let chain = scene.build().unwrap();
    assert_eq!(chain.names(), ["inset", "divide", "split", "border", "text"]);

    let mut from_scene = RecordingContext::new();
    let mut by_hand = RecordingContext::new();
    let stats = render(&chain, R, Some(&mut from_scene)).unwrap();
    render(&hand_built(), R, Some(&mut by_hand)).unwrap();

    assert_eq!(from_scene.commands(), by_hand.commands());
    // inset, divide, shape, fill, split, shadow, shape, fill, border, text
    assert_eq!(stats.actions, 10);
}

#[test]
fn test_scene_round_trips_through_json() {
    let scene: SceneSpec = toml::from_str(TOOLBAR).unwrap();
    let json = serde_json::to_string(&scene).unwrap();
    let back: SceneSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}

#[test]
fn test_invalid_gradient_in_scene() {
    let scene: SceneSpec = serde_json::from_str(
        r##"{ "actions": [
            { "kind": "fill", "color": "#000000" },
            { "kind": "linear_gradient", "gradient": { "colors": [] } }
        ] }"##,
    )
    .unwrap();

    let err = scene.build().unwrap_err();
    assert!(matches!(
        err,
        SceneError::Action {
            index: 1,
            kind: "linear_gradient",
            ..
        }
    ));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result: Result<SceneSpec, _> = toml::from_str(
        r#"
        [[actions]]
        kind = "sparkle"
        "#,
    );
    assert!(result.is_err());
}
