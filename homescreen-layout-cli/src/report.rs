//! Runs a scene through the engine and shapes the JSON report.

use anyhow::{Context, Result};
use serde::Serialize;

use homescreen_layout::{
    check_dimension, Anchor, ConstrainedStack, LayoutError, Rect, Role, Scene, Size,
};

use crate::cli::Args;

#[derive(Debug, Serialize)]
pub struct Report {
    pub size: Size,
    pub placements: Vec<ReportEntry>,
}

#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub id: String,
    pub role: Role,
    pub anchor: Anchor,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub frame: Rect,
}

/// Layout inputs after command-line overrides are applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub spacing: Option<f32>,
    pub min_height: Option<f32>,
}

impl From<&Args> for Overrides {
    fn from(args: &Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            spacing: args.spacing,
            min_height: args.min_height,
        }
    }
}

impl Overrides {
    /// Every override must be a finite, non-negative length.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("spacing", self.spacing),
            ("min_height", self.min_height),
        ] {
            if let Some(value) = value {
                check_dimension("command line", field, value)?;
            }
        }
        Ok(())
    }
}

pub fn build_report(scene: &Scene, overrides: Overrides) -> Result<Report> {
    overrides.validate().context("invalid override")?;
    let (children, ids) = scene.children().context("invalid scene")?;

    let mut config = scene.config;
    if let Some(spacing) = overrides.spacing {
        config.spacing = spacing;
    }
    if let Some(min_height) = overrides.min_height {
        config.min_height = min_height;
    }
    let stack = ConstrainedStack::from(config);

    let width = overrides.width.or(scene.width);
    let fitted = stack.size_that_fits(width, &children);

    // Unconstrained width resolves to the widest child
    let bounds_width = width.unwrap_or_else(|| children.widest_unconstrained());
    let bounds_height = overrides.height.or(scene.height).unwrap_or(fitted.height);
    let bounds = Rect::new(0.0, 0.0, bounds_width, bounds_height);
    tracing::info!(
        width = bounds.width,
        height = bounds.height,
        fitted_height = fitted.height,
        children = children.len(),
        "placing scene"
    );

    let result = stack.place_children(bounds, width, &children);
    let placements = result
        .placements
        .iter()
        .map(|p| ReportEntry {
            id: ids[p.id.index()].clone(),
            role: p.role,
            anchor: p.anchor,
            x: p.position.x,
            y: p.position.y,
            width: p.size.width,
            height: p.size.height,
            frame: p.frame(),
        })
        .collect();

    Ok(Report {
        size: result.size,
        placements,
    })
}

pub fn render(report: &Report, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "height": 1000.0,
        "width": 400.0,
        "children": [
            { "id": "invite", "size": { "width": 400.0, "height": 100.0 } },
            { "id": "empty", "priority": 1.0, "size": { "width": 50.0, "height": 50.0 } }
        ]
    }"#;

    #[test]
    fn test_report_centered_primary() {
        let scene = Scene::from_json(SCENE).unwrap();
        let report = build_report(&scene, Overrides::default()).unwrap();

        assert_eq!(report.size, Size::new(400.0, 1000.0));
        assert_eq!(report.placements.len(), 2);
        let primary = &report.placements[1];
        assert_eq!(primary.id, "empty");
        assert_eq!(primary.anchor, Anchor::Center);
        assert_eq!((primary.x, primary.y), (200.0, 500.0));
        assert_eq!(primary.frame, Rect::new(175.0, 475.0, 50.0, 50.0));
    }

    #[test]
    fn test_overrides_win() {
        let scene = Scene::from_json(SCENE).unwrap();
        let overrides = Overrides {
            height: Some(200.0),
            ..Overrides::default()
        };
        let report = build_report(&scene, overrides).unwrap();
        let primary = &report.placements[1];
        // 108 + 25 >= 100: appended below the banner
        assert_eq!(primary.anchor, Anchor::TopLeft);
        assert_eq!((primary.x, primary.y), (175.0, 108.0));
    }

    #[test]
    fn test_fitted_height_when_unspecified() {
        let scene = Scene::from_json(
            r#"{ "config": { "min_height": 300.0 }, "children": [
                { "id": "a", "size": { "width": 120.0, "height": 40.0 } },
                { "id": "b", "size": { "width": 60.0, "height": 40.0 } }
            ] }"#,
        )
        .unwrap();
        let overrides = Overrides {
            spacing: Some(20.0),
            ..Overrides::default()
        };
        let report = build_report(&scene, overrides).unwrap();
        assert_eq!(report.size, Size::new(120.0, 300.0));
        assert_eq!(report.placements[1].y, 60.0);
        assert_eq!(report.placements[1].x, 30.0);
    }

    #[test]
    fn test_non_finite_spacing_override_rejected() {
        let scene = Scene::from_json(SCENE).unwrap();
        let overrides = Overrides {
            spacing: Some(f32::NAN),
            ..Overrides::default()
        };
        let err = build_report(&scene, overrides).unwrap_err();
        assert_eq!(err.to_string(), "invalid override");
        assert!(format!("{err:#}").contains("invalid spacing for command line"));
    }

    #[test]
    fn test_negative_bounds_override_rejected() {
        let scene = Scene::from_json(SCENE).unwrap();
        for overrides in [
            Overrides {
                width: Some(-100.0),
                ..Overrides::default()
            },
            Overrides {
                height: Some(-50.0),
                ..Overrides::default()
            },
            Overrides {
                min_height: Some(f32::INFINITY),
                ..Overrides::default()
            },
        ] {
            let err = build_report(&scene, overrides).unwrap_err();
            let cause = err.downcast_ref::<LayoutError>();
            assert!(matches!(cause, Some(LayoutError::InvalidDimension { .. })));
        }
    }

    #[test]
    fn test_overflowing_scene_spacing_rejected() {
        let scene = Scene::from_json(
            r#"{ "config": { "spacing": 1e39 }, "children": [
                { "id": "a", "size": { "width": 1.0, "height": 1.0 } }
            ] }"#,
        )
        .unwrap();
        let err = build_report(&scene, Overrides::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid scene");
    }

    #[test]
    fn test_invalid_scene_has_context() {
        let scene = Scene::from_json(r#"{ "children": [ { "id": "x" } ] }"#).unwrap();
        let err = build_report(&scene, Overrides::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid scene");
        assert!(format!("{err:#}").contains("neither a size nor text"));
    }

    #[test]
    fn test_render_json() {
        let scene = Scene::from_json(SCENE).unwrap();
        let report = build_report(&scene, Overrides::default()).unwrap();
        let json = render(&report, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["placements"][0]["role"], "banner");
        assert_eq!(value["placements"][1]["anchor"], "center");
        assert!(!json.contains('\n'));
        assert!(render(&report, false).unwrap().contains('\n'));
    }
}
