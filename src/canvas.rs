use crate::constants::GLYPH_FONT_FAMILY;
use glam::Vec2;
use site_core::paint::Stops;
use site_core::{CubicCurve, Glow, LinearGradient, RadialGradient, Rgba, Surface, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of [`Surface`].
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
}

impl Canvas2dSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            viewport: Viewport::new(canvas.width(), canvas.height()),
        })
    }

    /// `None` (logged) when the canvas has no 2D context.
    pub fn open(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        match Self::from_canvas(canvas) {
            Ok(surface) => Some(surface),
            Err(e) => {
                log::debug!("[canvas] {}", e);
                None
            }
        }
    }

    fn add_stops(gradient: &web::CanvasGradient, stops: &Stops) {
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
        }
    }

    // Redraw the current path with a shadow on top of the plain pass.
    fn glow_pass(&self, glow: Option<Glow>, redraw: impl Fn(&web::CanvasRenderingContext2d)) {
        if let Some(glow) = glow {
            self.ctx.set_shadow_color(&glow.color.to_string());
            self.ctx.set_shadow_blur(glow.blur as f64);
            redraw(&self.ctx);
            self.ctx.set_shadow_blur(0.0);
        }
    }
}

impl Surface for Canvas2dSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
        self.viewport = viewport;
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.viewport.w() as f64, self.viewport.h() as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
        self.glow_pass(glow, |ctx| ctx.fill());
    }

    fn stroke_curve(
        &mut self,
        curve: &CubicCurve,
        paint: &LinearGradient,
        width: f32,
        glow: Option<Glow>,
    ) {
        let gradient = self.ctx.create_linear_gradient(
            paint.from.x as f64,
            paint.from.y as f64,
            paint.to.x as f64,
            paint.to.y as f64,
        );
        Self::add_stops(&gradient, &paint.stops);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(width as f64);

        self.ctx.begin_path();
        self.ctx.move_to(curve.start.x as f64, curve.start.y as f64);
        self.ctx.bezier_curve_to(
            curve.ctrl1.x as f64,
            curve.ctrl1.y as f64,
            curve.ctrl2.x as f64,
            curve.ctrl2.y as f64,
            curve.end.x as f64,
            curve.end.y as f64,
        );
        self.ctx.stroke();
        self.glow_pass(glow, |ctx| ctx.stroke());
    }

    fn fill_glyph(
        &mut self,
        glyph: char,
        center: Vec2,
        size_px: f32,
        color: Rgba,
        glow: Option<Glow>,
    ) {
        self.ctx
            .set_font(&format!("{}px {}", size_px, GLYPH_FONT_FAMILY));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&color.to_string());
        if let Some(glow) = glow {
            self.ctx.set_shadow_color(&glow.color.to_string());
            self.ctx.set_shadow_blur(glow.blur as f64);
        }
        _ = self
            .ctx
            .fill_text(&glyph.to_string(), center.x as f64, center.y as f64);
        self.ctx.set_shadow_blur(0.0);
    }

    fn fill_radial(&mut self, gradient: &RadialGradient) {
        let c = gradient.center;
        let Ok(g) = self.ctx.create_radial_gradient(
            c.x as f64,
            c.y as f64,
            gradient.inner_radius as f64,
            c.x as f64,
            c.y as f64,
            gradient.outer_radius as f64,
        ) else {
            return;
        };
        Self::add_stops(&g, &gradient.stops);
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx
            .fill_rect(0.0, 0.0, self.viewport.w() as f64, self.viewport.h() as f64);
    }
}
