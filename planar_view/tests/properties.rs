// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the `planar_view` transform.
//!
//! These cover the algebraic guarantees callers rely on: the transform is
//! affine in world coordinates, the camera always lands on the viewport
//! center, pans undo each other, and zooms compose multiplicatively.

use kurbo::Point;
use planar_view::Viewport;
use proptest::prelude::*;

fn viewport(cam_x: f64, cam_y: f64, scale: f64, w: u32, h: u32) -> Viewport {
    let mut vp = Viewport::new(w, h);
    vp.set_scale_limits(1e-3, 1e6);
    vp.set_camera(Point::new(cam_x, cam_y));
    vp.set_scale(scale);
    vp
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn camera_maps_to_center(
        cam_x in -1e4..1e4f64,
        cam_y in -1e4..1e4f64,
        scale in 1e-2..1e4f64,
        w in 1u32..4096,
        h in 1u32..4096,
    ) {
        let vp = viewport(cam_x, cam_y, scale, w, h);
        prop_assert_eq!(vp.to_screen_x(cam_x), f64::from(w) / 2.0);
        prop_assert_eq!(vp.to_screen_y(cam_y), f64::from(h) / 2.0);
    }

    #[test]
    fn transform_is_affine(
        cam_x in -1e3..1e3f64,
        cam_y in -1e3..1e3f64,
        scale in 1e-2..1e3f64,
        a in -1e3..1e3f64,
        b in -1e3..1e3f64,
        t in 0.0..1.0f64,
    ) {
        let vp = viewport(cam_x, cam_y, scale, 1920, 1080);
        let mid = a + (b - a) * t;

        let sx = vp.to_screen_x(a) + (vp.to_screen_x(b) - vp.to_screen_x(a)) * t;
        prop_assert!((vp.to_screen_x(mid) - sx).abs() < 1e-6 * scale.max(1.0) * 1e3);

        let sy = vp.to_screen_y(a) + (vp.to_screen_y(b) - vp.to_screen_y(a)) * t;
        prop_assert!((vp.to_screen_y(mid) - sy).abs() < 1e-6 * scale.max(1.0) * 1e3);
    }

    #[test]
    fn pan_round_trip_restores_camera(
        cam_x in -1e4..1e4f64,
        cam_y in -1e4..1e4f64,
        dx in -1e4..1e4f64,
        dy in -1e4..1e4f64,
    ) {
        let mut vp = viewport(cam_x, cam_y, 50.0, 800, 600);
        vp.pan(dx, 0.0);
        vp.pan(-dx, 0.0);
        prop_assert!(close(vp.camera_x(), cam_x));
        prop_assert_eq!(vp.camera_y(), cam_y);

        vp.pan(0.0, dy);
        vp.pan(0.0, -dy);
        prop_assert!(close(vp.camera_y(), cam_y));
    }

    #[test]
    fn zoom_composes_multiplicatively(
        scale in 1.0..100.0f64,
        a in 0.1..10.0f64,
        b in 0.1..10.0f64,
    ) {
        let mut stepwise = viewport(0.0, 0.0, scale, 800, 600);
        stepwise.zoom(a);
        stepwise.zoom(b);

        let mut combined = viewport(0.0, 0.0, scale, 800, 600);
        combined.zoom(a * b);

        prop_assert!(close(stepwise.scale(), combined.scale()));
        prop_assert!(stepwise.scale() > 0.0);
    }

    #[test]
    fn world_screen_round_trip(
        cam_x in -1e3..1e3f64,
        cam_y in -1e3..1e3f64,
        scale in 1e-1..1e3f64,
        x in -1e3..1e3f64,
        y in -1e3..1e3f64,
    ) {
        let vp = viewport(cam_x, cam_y, scale, 1280, 720);
        let back = vp.to_world_point(vp.to_screen_point(Point::new(x, y)));
        prop_assert!((back.x - x).abs() < 1e-6);
        prop_assert!((back.y - y).abs() < 1e-6);
    }
}

#[test]
fn scenario_default_viewport_center() {
    let vp = Viewport::new(1920, 1080);
    assert_eq!(vp.scale(), 50.0);
    assert_eq!(vp.to_screen_x(0.0), 960.0);
    assert_eq!(vp.to_screen_y(0.0), 540.0);
}

#[test]
fn scenario_zoom_out_and_back() {
    let mut vp = Viewport::new(1920, 1080);
    vp.zoom(1.0 / 1.1);
    assert!((vp.scale() - 45.454_545).abs() < 1e-4);
    vp.zoom(1.1);
    assert!((vp.scale() - 50.0).abs() < 1e-9);
}
