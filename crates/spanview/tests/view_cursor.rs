//! Cursor behavior of views.

use spanview::{Region, RenderError, Renderer, Span, StreamRenderer, View, ViewRender};
use spanview_test::{FailingFormatter, RecordingRenderer};

#[test]
fn write_newline_write_on_two_line_region() {
    let mut out = RecordingRenderer::new(Region::output(80, 24));
    let mut view = View::with_region(&mut out, Region::new(0, 5, 10, 2));

    view.write(&"x").unwrap();
    view.newline();
    view.write(&"y").unwrap();
    let before = (view.vertical_offset(), view.effective_region());
    view.newline();
    assert_eq!((view.vertical_offset(), view.effective_region()), before);
    drop(view);

    let calls = out.calls();
    assert_eq!(calls[0].text(), "x");
    assert_eq!(calls[0].region.top, 5);
    assert_eq!(calls[1].text(), "y");
    assert_eq!(calls[1].region.top, 6);
}

#[test]
fn write_line_never_advances_past_last_line() {
    let mut out = RecordingRenderer::new(Region::output(80, 24));
    let mut view = View::with_region(&mut out, Region::new(0, 0, 10, 3));
    for i in 0..10 {
        view.write_line(&i).unwrap();
    }
    assert_eq!(view.vertical_offset(), 2);
    drop(view);

    let tops: Vec<usize> = out.calls().iter().map(|c| c.region.top).collect();
    assert_eq!(tops, vec![0, 1, 2, 2, 2, 2, 2, 2, 2, 2]);
}

#[test]
fn view_without_region_uses_screen() {
    let mut out = RecordingRenderer::new(Region::output(40, 10));
    let mut view = View::new(&mut out);
    view.write(&"hello").unwrap();
    drop(view);

    let region = out.calls()[0].region;
    assert_eq!(region, Region::new(0, 0, 40, 10));
    assert!(!region.is_output_resource);
}

#[test]
fn formatter_failure_propagates_without_painting() {
    let mut out = RecordingRenderer::new(Region::output(40, 10)).with_formatter(FailingFormatter);
    let mut view = View::new(&mut out);
    let err = view.write_line(&"nope").unwrap_err();
    assert!(matches!(err, RenderError::Format(_)));
    assert_eq!(view.vertical_offset(), 0);
    drop(view);
    assert!(out.calls().is_empty());
}

#[test]
fn write_span_line_skips_formatter() {
    let mut out = RecordingRenderer::new(Region::output(40, 10)).with_formatter(FailingFormatter);
    let mut view = View::new(&mut out);
    view.write_span_line(&Span::content("raw")).unwrap();
    assert_eq!(view.vertical_offset(), 1);
    drop(view);
    assert_eq!(out.texts(), vec!["raw"]);
}

struct Report;

struct Summary {
    title: &'static str,
    lines: Vec<&'static str>,
}

impl ViewRender<Summary> for Report {
    fn on_render<R: Renderer + ?Sized>(
        &self,
        view: &mut View<'_, R>,
        value: &Summary,
    ) -> Result<(), RenderError> {
        view.write_line(&value.title)?;
        for line in &value.lines {
            view.write_line(line)?;
        }
        Ok(())
    }
}

#[test]
fn render_resets_cursor_between_calls() {
    let mut out = RecordingRenderer::new(Region::output(40, 10));
    let mut view = View::with_region(&mut out, Region::new(2, 3, 20, 5));

    let summary = Summary {
        title: "Totals",
        lines: vec!["a", "b"],
    };
    view.render(&Report, &summary).unwrap();
    assert_eq!(view.vertical_offset(), 3);
    view.render(&Report, &summary).unwrap();
    assert_eq!(view.vertical_offset(), 3);
    drop(view);

    let tops: Vec<usize> = out.calls().iter().map(|c| c.region.top).collect();
    assert_eq!(tops, vec![3, 4, 5, 3, 4, 5]);
    assert!(out.calls().iter().all(|c| c.region.left == 2));
}

#[test]
fn render_through_dyn_renderer() {
    let mut out = RecordingRenderer::new(Region::output(40, 10));
    let renderer: &mut dyn Renderer = &mut out;
    let mut view = View::new(renderer);
    view.render_with(|v| v.write_line(&"dyn")).unwrap();
    drop(view);
    assert_eq!(out.texts(), vec!["dyn"]);
}

#[test]
fn view_write_line_through_stream() {
    let mut out = StreamRenderer::new(Vec::new()).with_screen(10, 5);
    let mut view = View::new(&mut out);
    view.write_line(&"a").unwrap();
    view.write_line(&"b").unwrap();
    view.render_table(&["x"], |t| {
        t.column("Col", |s: &&str| Span::content(*s));
    })
    .unwrap();
    drop(view);

    let text = String::from_utf8(out.into_inner()).unwrap();
    assert_eq!(text, "a\nb\nCol\nx\n");
}
