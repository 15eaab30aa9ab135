//! End-to-end rendering tests against the recording device
//!
//! These check the observable contract of a render pass:
//! - the exact device call sequence for simple chains
//! - that every scope is unwound, on success and on error
//! - that branches (divide, split) never see each other's state

use daub_core::actions::{
    Border, BorderGradient, ClearPath, Clip, ClipSource, Divide, DropShadow, Fill, Forward, Inset,
    Line, LinearGradient, Shape, ShapeGenerator, Split, Text, TransparencyLayer,
};
use daub_core::{render, Chain, RenderError, RenderState};
use daub_paint::{
    AttributedText, Color, DrawCommand, FillRule, Gradient, LineCap, Path, Rect, RecordingContext,
    RectEdge, Shadow, TextStyle, UnitPoint,
};

const R: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

fn filled_rects(device: &RecordingContext) -> Vec<(Rect, Color)> {
    device
        .draws()
        .filter_map(|(command, state)| match command {
            DrawCommand::FillRect(rect) => Some((*rect, state.fill_color)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_fill_then_border_call_sequence() {
    let chain = Chain::new(Fill::new(Color::BLUE)).then(Border::new(Color::RED, 2.0));
    let mut device = RecordingContext::new();
    render(&chain, R, Some(&mut device)).unwrap();

    assert_eq!(
        device.commands(),
        &[
            DrawCommand::Save,
            DrawCommand::SetFillColor(Color::BLUE),
            DrawCommand::FillRect(R),
            DrawCommand::Restore,
            DrawCommand::Save,
            DrawCommand::SetStrokeColor(Color::RED),
            DrawCommand::SetLineWidth(2.0),
            DrawCommand::StrokeRect(R),
            DrawCommand::Restore,
        ]
    );
}

#[test]
fn test_inset_then_fill() {
    let chain = Chain::new(Inset::uniform(10.0)).then(Fill::new(Color::GREEN));
    let mut device = RecordingContext::new();
    let stats = render(&chain, R, Some(&mut device)).unwrap();

    assert_eq!(
        filled_rects(&device),
        [(Rect::new(10.0, 10.0, 80.0, 80.0), Color::GREEN)]
    );
    assert_eq!(stats.actions, 2);
    assert_eq!(stats.max_logical_depth, 1);
}

#[test]
fn test_inset_only_applies_to_its_continuation() {
    // The split's first chain insets; the outer fill must still see R
    let first = Chain::new(Inset::uniform(10.0)).then(Fill::new(Color::GREEN));
    let chain = Chain::new(Split::new(first)).then(Fill::new(Color::RED));
    let mut device = RecordingContext::new();
    render(&chain, R, Some(&mut device)).unwrap();

    assert_eq!(
        filled_rects(&device),
        [
            (Rect::new(10.0, 10.0, 80.0, 80.0), Color::GREEN),
            (R, Color::RED),
        ]
    );
}

#[test]
fn test_divide_slice_and_remainder() {
    let chain = Chain::new(
        Divide::new(40.0, RectEdge::MinX)
            .with_padding(5.0)
            .with_slice(Fill::new(Color::BLUE)),
    )
    .then(Fill::new(Color::RED));
    let mut device = RecordingContext::new();
    render(&chain, R, Some(&mut device)).unwrap();

    assert_eq!(
        filled_rects(&device),
        [
            (Rect::new(0.0, 0.0, 40.0, 100.0), Color::BLUE),
            (Rect::new(45.0, 0.0, 55.0, 100.0), Color::RED),
        ]
    );
}

#[test]
fn test_divide_geometry_on_every_edge() {
    let cases = [
        (RectEdge::MinX, Rect::new(0.0, 0.0, 30.0, 100.0), Rect::new(40.0, 0.0, 60.0, 100.0)),
        (RectEdge::MaxX, Rect::new(70.0, 0.0, 30.0, 100.0), Rect::new(0.0, 0.0, 60.0, 100.0)),
        (RectEdge::MinY, Rect::new(0.0, 0.0, 100.0, 30.0), Rect::new(0.0, 40.0, 100.0, 60.0)),
        (RectEdge::MaxY, Rect::new(0.0, 70.0, 100.0, 30.0), Rect::new(0.0, 0.0, 100.0, 60.0)),
    ];

    for (edge, slice, remainder) in cases {
        let chain = Chain::new(
            Divide::new(30.0, edge)
                .with_padding(10.0)
                .with_slice(Fill::new(Color::BLUE)),
        )
        .then(Fill::new(Color::RED));
        let mut device = RecordingContext::new();
        render(&chain, R, Some(&mut device)).unwrap();

        let rects = filled_rects(&device);
        assert_eq!(rects[0].0, slice, "slice for {edge:?}");
        assert_eq!(rects[1].0, remainder, "remainder for {edge:?}");
        assert!(!rects[0].0.overlaps(&rects[1].0));
    }
}

#[test]
fn test_divide_degenerate_remainder_is_legal() {
    let chain = Chain::new(Divide::new(150.0, RectEdge::MinY).with_padding(5.0))
        .then(Fill::new(Color::RED));
    let mut device = RecordingContext::new();
    render(&chain, R, Some(&mut device)).unwrap();

    assert_eq!(
        filled_rects(&device),
        [(Rect::new(0.0, 100.0, 100.0, 0.0), Color::RED)]
    );
}

#[test]
fn test_degenerate_remainder_draws_nothing_visible() {
    let text = AttributedText::plain("Hidden", TextStyle::new(16.0));
    let rule = Line::new(Color::BLACK, 4.0, [UnitPoint::TOP, UnitPoint::BOTTOM])
        .unwrap()
        .with_cap(LineCap::Round);
    let chain = Chain::new(Divide::new(150.0, RectEdge::MinX))
        .then(Border::new(Color::RED, 4.0))
        .then(rule)
        .then(Text::new(text))
        .then(Forward);
    let mut device = RecordingContext::new();
    let stats = render(&chain, R, Some(&mut device)).unwrap();

    assert_eq!(stats.actions, 5);
    assert_eq!(device.draws().count(), 0);
    assert_eq!(device.save_depth(), 0);
}

#[test]
fn test_split_successor_sees_incoming_rect_and_path() {
    let first = Chain::new(Inset::uniform(10.0))
        .then(ClearPath)
        .then(Fill::new(Color::GREEN));
    let chain = Chain::new(Shape::new(ShapeGenerator::Rect))
        .then(Split::new(first))
        .then(Fill::new(Color::RED));
    let mut device = RecordingContext::new();
    render(&chain, R, Some(&mut device)).unwrap();

    let draws: Vec<_> = device.draws().map(|(command, _)| command.clone()).collect();
    assert_eq!(
        draws,
        [
            DrawCommand::FillRect(Rect::new(10.0, 10.0, 80.0, 80.0)),
            DrawCommand::FillPath {
                path: Path::rect(R),
                rule: FillRule::NonZero,
            },
        ]
    );
}

#[test]
fn test_append_is_tail_insertion() {
    let mut chain = Chain::new(Fill::new(Color::RED));
    chain.append(Border::new(Color::BLUE, 1.0));
    chain.append(Forward);

    assert_eq!(chain.names(), ["fill", "border", "forward"]);
}

#[test]
fn test_nested_shadows_resolve_innermost_first() {
    let outer = Shadow::new(0.0, 1.0, 2.0, Color::BLACK);
    let inner = Shadow::new(0.0, 8.0, 12.0, Color::BLUE);

    let first = Chain::new(DropShadow::new(inner)).then(Fill::new(Color::RED));
    let chain = Chain::new(DropShadow::new(outer))
        .then(Split::new(first))
        .then(Fill::new(Color::GREEN));
    let mut device = RecordingContext::new();
    let stats = render(&chain, R, Some(&mut device)).unwrap();

    let shadows: Vec<_> = device.draws().map(|(_, state)| state.shadow).collect();
    assert_eq!(shadows, [inner, outer]);
    assert_eq!(device.state().shadow, Shadow::none());
    assert_eq!(stats.max_device_depth, 3);
}

#[test]
fn test_missing_path_unwinds_every_scope() {
    let chain = Chain::new(Inset::uniform(5.0))
        .then(DropShadow::new(Shadow::md()))
        .then(Clip::new(ClipSource::CurrentRect))
        .then(Clip::new(ClipSource::CurrentPath))
        .then(Fill::new(Color::RED));
    let mut device = RecordingContext::new();
    {
        let mut state = RenderState::new(R, &mut device);
        let err = chain.execute(&mut state).unwrap_err();

        assert_eq!(err, RenderError::MissingPath { action: "clip" });
        assert_eq!(state.rect(), R);
        assert!(state.path().is_none());
        assert!(state.is_balanced());
    }

    assert_eq!(device.save_depth(), 0);
    assert_eq!(device.state().shadow, Shadow::none());
    assert_eq!(device.state().clip_depth, 0);
    assert_eq!(device.draws().count(), 0);
}

#[test]
fn test_transparency_layer_closes_on_error() {
    let gradient = LinearGradient::new(Gradient::simple(Color::RED, Color::BLUE));
    let chain = Chain::new(DropShadow::new(Shadow::lg()))
        .then(TransparencyLayer)
        .then(Fill::new(Color::GREEN))
        .then(BorderGradient::new(3.0, gradient));
    let mut device = RecordingContext::new();
    let err = render(&chain, R, Some(&mut device)).unwrap_err();

    assert_eq!(
        err,
        RenderError::MissingPath {
            action: "border_gradient"
        }
    );
    assert_eq!(device.layer_depth(), 0);
    assert_eq!(device.save_depth(), 0);
    assert_eq!(
        device.commands().iter().rev().nth(2),
        Some(&DrawCommand::EndTransparencyLayer)
    );
}

#[test]
fn test_render_without_device() {
    let chain = Chain::new(Fill::new(Color::RED));
    assert_eq!(render(&chain, R, None), Err(RenderError::NoDevice));
}

#[test]
fn test_gradient_stops_are_evenly_spaced() {
    let gradient = Gradient::new([Color::RED, Color::GREEN, Color::BLUE]).unwrap();
    let offsets: Vec<f32> = gradient.resolved().stops.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, [0.0, 0.5, 1.0]);

    let single = Gradient::new([Color::RED]).unwrap();
    assert_eq!(single.resolved().stops.len(), 1);
    assert_eq!(single.resolved().stops[0].offset, 0.0);
}

#[test]
fn test_reusing_a_chain_across_passes() {
    let chain = Chain::new(Shape::rounded(6.0))
        .then(LinearGradient::new(Gradient::simple(Color::WHITE, Color::BLACK)))
        .then(Border::new(Color::BLACK, 1.0));

    let mut first = RecordingContext::new();
    let mut second = RecordingContext::new();
    render(&chain, R, Some(&mut first)).unwrap();
    render(&chain, R, Some(&mut second)).unwrap();

    assert_eq!(first.commands(), second.commands());
}
