use eframe::{egui, epaint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pga2::motor::rotor;
use pga2::ops::*;
use pga2::render::{render, Drawable, Viewport};
use pga2::{ideal_line, make_ideal_point, make_point, Error, Multivector};

const EPS: f64 = pga2::scalar::DEFAULT_EPSILON;

/// Everything that shapes the plotted scene
#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    /// Number of random points; consecutive pairs are joined into lines
    pub points: usize,
    pub seed: u64,
    /// Random coordinates are drawn from `-spread..spread`
    pub spread: f64,
    /// Radians the scene turns about the origin each frame
    pub spin: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            xmin: -5.,
            xmax: 5.,
            ymin: -4.,
            ymax: 4.,
            points: 6,
            seed: 7,
            spread: 6.,
            spin: 0.005,
        }
    }
}

impl PlotConfig {
    pub fn viewport(&self) -> pga2::Result<Viewport<f64>> {
        Viewport::new(self.xmin, self.xmax, self.ymin, self.ymax)
    }
}

/// `RUST_LOG` when the environment sets none: this workspace at `debug`
/// (or `info` in release builds), everything else at `warn`
pub fn default_log_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("pga2={level},pga2_plot={level},warn")
}

pub fn rand_point(rng: &mut impl Rng, spread: f64) -> Multivector<f64> {
    make_point(rng.gen_range(-spread..spread), rng.gen_range(-spread..spread))
}

/// The line through two random points
pub fn rand_line(rng: &mut impl Rng, spread: f64) -> Multivector<f64> {
    rand_point(rng, spread).join(rand_point(rng, spread))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Point,
    Line,
    Intersection,
}

/// Geometry to plot, in world coordinates, before this frame's rotation
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub elements: Vec<(Role, Multivector<f64>)>,
}

impl Scene {
    /// Random points, the lines joining consecutive pairs,
    /// and where each line meets the next.
    /// The ideal line and one ideal point are always included.
    pub fn generate(config: &PlotConfig) -> Scene {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let points: Vec<_> = (0..config.points)
            .map(|_| rand_point(&mut rng, config.spread))
            .collect();
        let mut lines: Vec<_> = points
            .chunks_exact(2)
            .map(|pair| pair[0].join(pair[1]))
            .collect();
        lines.push(rand_line(&mut rng, config.spread));

        let mut elements: Vec<_> = points.iter().map(|&p| (Role::Point, p)).collect();
        elements.extend(lines.iter().map(|&l| (Role::Line, l)));
        for pair in lines.windows(2) {
            let meet = pair[0].meet(pair[1]);
            if is_parallel(pair[0], pair[1], EPS) {
                log::info!("parallel lines meet at the ideal point {}", meet);
            }
            elements.push((Role::Intersection, meet));
        }
        elements.push((Role::Line, ideal_line()));
        elements.push((Role::Intersection, make_ideal_point(1., 1.)));

        log::debug!("generated {} elements from seed {}", elements.len(), config.seed);
        Scene { elements }
    }
}

pub struct PlotApp {
    config: PlotConfig,
    viewport: Viewport<f64>,
    scene: Scene,
    angle: f64,
}

impl PlotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: PlotConfig) -> pga2::Result<Self> {
        let viewport = config.viewport()?;
        let scene = Scene::generate(&config);
        Ok(PlotApp {
            config,
            viewport,
            scene,
            angle: 0.,
        })
    }

    fn step(&mut self) {
        self.angle = (self.angle + self.config.spin) % core::f64::consts::TAU;
    }

    /// This frame's drawables. Lines that miss the viewport are left out.
    pub fn drawables(&self) -> Vec<(Role, Drawable<f64>)> {
        let motor = match rotor(self.angle, make_point(0., 0.), EPS) {
            Ok(motor) => motor,
            Err(e) => {
                log::warn!("cannot rotate the scene: {}", e);
                return vec![];
            }
        };
        self.scene
            .elements
            .iter()
            .filter_map(|&(role, x)| match render(motor.transform(x), &self.viewport, EPS) {
                Ok(drawable) => Some((role, drawable)),
                Err(Error::LineOutsideViewport) => None,
                Err(e) => {
                    log::warn!("skipping {}: {}", x, e);
                    None
                }
            })
            .collect()
    }

    fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        let screen = |x: f64, y: f64| to_screen(&self.viewport, rect, x, y);

        for (role, drawable) in self.drawables() {
            let color = match role {
                Role::Point => epaint::Color32::DARK_BLUE,
                Role::Line => epaint::Color32::DARK_GRAY,
                Role::Intersection => epaint::Color32::DARK_RED,
            };
            let stroke = epaint::Stroke::new(2., color);
            match drawable {
                Drawable::Segment { x0, y0, x1, y1 } => {
                    painter.line_segment([screen(x0, y0), screen(x1, y1)], stroke);
                }
                Drawable::Marker { x, y } => {
                    painter.circle_filled(screen(x, y), 4., color);
                }
                Drawable::DirectionArrow { x, y, dx, dy } => {
                    let origin = screen(x, y);
                    painter.arrow(origin, screen(x + dx, y + dy) - origin, stroke);
                }
                Drawable::BoundaryCurve => {
                    painter.rect_stroke(rect.shrink(1.), 0., stroke);
                }
            }
        }
    }
}

/// Map viewport coordinates onto `rect`, with y pointing up
pub fn to_screen(viewport: &Viewport<f64>, rect: egui::Rect, x: f64, y: f64) -> egui::Pos2 {
    let u = (x - viewport.xmin()) / viewport.width();
    let v = (viewport.ymax() - y) / viewport.height();
    egui::pos2(
        rect.left() + u as f32 * rect.width(),
        rect.top() + v as f32 * rect.height(),
    )
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step();

        ctx.set_visuals(egui::Visuals::light());
        egui::CentralPanel::default().show(ctx, |ui| {
            let (_, rect) = ui.allocate_space(ui.available_size());
            let painter = ui.painter().with_clip_rect(rect);
            self.paint(&painter, rect);
        });
        ctx.request_repaint();
    }
}
