mod proc_errors;
mod cfg;
pub mod formats;

use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Serialize, Deserialize};

use crate::geo_3d::Point;

// Re-export errors
pub use proc_errors::{
    TileError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    Ceiling,
    TileArgs,
    TileTarget,
};
// Re-export output formats
pub use formats::{
    FormatEnum,
    OutputFormatTrait,
};

/// Surface reflectiveness given to every generated triangle.
pub const REFLECTIVENESS: f64 = 0.1;

/// A colored triangle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub color: String,
    pub reflectiveness: f64,
}
impl Triangle {
    /// Create a new triangle with the fixed reflectiveness.
    pub fn new(a: Point, b: Point, c: Point, color: &str) -> Self {
        Triangle{a, b, c, color: color.to_string(), reflectiveness: REFLECTIVENESS}
    }
}

/// Container record bracketing the floor triangles.
/// Purely structural, the corners annotate the floor footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}
impl Container {
    /// Container spanning the floor from `origin` to the far corner at (`max_x`, `max_z`).
    pub fn around_floor(origin: Point, max_x: f64, max_z: f64) -> Self {
        Container{
            a: origin,
            b: origin.with_x(max_x),
            c: origin.with_x(max_x).with_z(max_z),
            d: origin.with_z(max_z),
        }
    }
}

/// Axis-aligned rectangle lying in one coordinate plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Point; 4],
}
impl Quad {
    /// Build the quad from two diagonal corners.
    /// The flat axis is inferred from which coordinates `p0` and `p1` share,
    /// checking z/y first and x second.
    /// Corners that share none of them do not describe an axis-aligned quad and are rejected.
    pub fn from_diagonal(p0: Point, p1: Point) -> ProcResult<Self> {
        if p0.z == p1.z || p0.y == p1.y {
            Ok(Quad{corners: [p0, p0.with_x(p1.x), p1, p1.with_x(p0.x)]})
        } else if p0.x == p1.x {
            Ok(Quad{corners: [p0, p0.with_z(p1.z), p1, p1.with_z(p0.z)]})
        } else {
            err_str(&format!("Corners {:.6} and {:.6} do not span an axis-aligned quad", p0, p1))
        }
    }

    /// Split the quad along the `corners[0] -> corners[2]` diagonal.
    pub fn triangles(&self, color: &str) -> [Triangle; 2] {
        let [c0, c1, c2, c3] = self.corners;
        [
            Triangle::new(c0, c1, c2, color),
            Triangle::new(c2, c3, c0, color),
        ]
    }
}

/// Everything generated in one pass, in output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Container around the floor, if requested.
    pub container: Option<Container>,
    /// Floor triangles, inside the container when there is one.
    pub floor: Vec<Triangle>,
    /// Wall and ceiling triangles.
    pub walls: Vec<Triangle>,
}
impl Scene {
    /// All triangles, floor first.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.floor.iter().chain(self.walls.iter())
    }

    pub fn triangle_count(&self) -> usize {
        self.floor.len() + self.walls.len()
    }
}

/// Build the full scene (floor, optional container and optional walls) for a set of tile arguments.
pub fn build_scene(tiles: &TileArgs) -> ProcResult<Scene> {
    let (max_x, max_z) = tiles.extent();

    info!("Generating {}x{} floor of {}-sized tiles from {}...", tiles.width, tiles.depth, tiles.tile_size, tiles.corner);
    let floor = generate_floor(&tiles.colors, tiles.corner, tiles.tile_size, tiles.width, tiles.depth)?;

    let container = if tiles.container {
        Some(Container::around_floor(tiles.corner, max_x, max_z))
    } else {
        None
    };

    let walls = match tiles.ceiling.as_ref() {
        Some(ceiling) => {
            info!("Generating walls up to a ceiling at y = {}...", ceiling.height);
            generate_walls(&ceiling.color, tiles.corner, max_x, max_z, ceiling.height)?
        },
        None => Vec::new(),
    };

    info!("Generated {} floor and {} wall triangles", floor.len(), walls.len());
    Ok(Scene{container, floor, walls})
}

/// Generate the checkerboard floor at `y = origin.y`.
/// Cells run over x (outer) then z (inner), and cell `(i, j)` takes `colors[(i + j) % 2]`.
/// Each cell gives two triangles sharing the `p -> p + dx + dz` diagonal.
pub fn generate_floor(colors: &[String; 2], origin: Point, cell_size: f64, width: u32, depth: u32) -> ProcResult<Vec<Triangle>> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
        err_str(&format!("Tile size must be a positive finite number, got {}", cell_size))?;
    }

    let y = origin.y;
    let mut triangles = Vec::<Triangle>::with_capacity(2 * width as usize * depth as usize);
    for (i, j) in (0..width).cartesian_product(0..depth) {
        let color = &colors[cell_parity(i, j)];
        let (x0, z0) = (grid_line(origin.x, i, cell_size), grid_line(origin.z, j, cell_size));
        let (x1, z1) = (x0 + cell_size, z0 + cell_size);
        trace!("Cell ({}, {}) at ({:.6}, {:.6}, {:.6}): {}", i, j, x0, y, z0, color);

        let p = Point::new(x0, y, z0);
        triangles.push(Triangle::new(p, Point::new(x1, y, z0), Point::new(x1, y, z1), color));
        triangles.push(Triangle::new(p, Point::new(x0, y, z1), Point::new(x1, y, z1), color));
    }

    Ok(triangles)
}

/// Generate the four walls and the ceiling around a floor footprint.
/// `ceiling_height` is the absolute y of the ceiling; zero means no walls.
pub fn generate_walls(color: &str, origin: Point, max_x: f64, max_z: f64, ceiling_height: f64) -> ProcResult<Vec<Triangle>> {
    if ceiling_height == 0.0 {
        debug!("Ceiling height is zero, no walls generated");
        return Ok(Vec::new());
    }

    let diagonals = [
        // Wall on the near z face
        (origin, Point::new(max_x, ceiling_height, origin.z)),
        // Wall on the near x face
        (origin, Point::new(origin.x, ceiling_height, max_z)),
        // Wall on the far x face
        (origin.with_x(max_x), Point::new(max_x, ceiling_height, max_z)),
        // Wall on the far z face
        (Point::new(max_x, origin.y, max_z), Point::new(origin.x, ceiling_height, max_z)),
        // Ceiling
        (origin.with_y(ceiling_height), Point::new(max_x, ceiling_height, max_z)),
    ];

    let mut triangles = Vec::<Triangle>::with_capacity(2 * diagonals.len());
    for (p0, p1) in diagonals {
        debug!("Wall quad {:.6} -> {:.6}", p0, p1);
        triangles.extend(aab_quad(color, p0, p1)?);
    }
    Ok(triangles)
}

/// Two triangles covering the axis-aligned rectangle with diagonal `p0 -> p1`.
pub fn aab_quad(color: &str, p0: Point, p1: Point) -> ProcResult<[Triangle; 2]> {
    Ok(Quad::from_diagonal(p0, p1)?.triangles(color))
}

/// Coordinate of grid line `index` along one axis.
/// Line 0 is `start` itself, so a `-0` corner prints the same as the container.
fn grid_line(start: f64, index: u32, cell_size: f64) -> f64 {
    if index == 0 {
        start
    } else {
        start + f64::from(index) * cell_size
    }
}

/// Checkerboard index of cell `(i, j)`.
fn cell_parity(i: u32, j: u32) -> usize {
    ((u64::from(i) + u64::from(j)) % 2) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> [String; 2] {
        ["black".to_string(), "white".to_string()]
    }

    /// Color of cell `(i, j)` read back from the generated triangles.
    fn cell_color(floor: &[Triangle], depth: u32, i: u32, j: u32) -> &str {
        let idx = 2 * (i * depth + j) as usize;
        assert_eq!(floor[idx].color, floor[idx + 1].color);
        &floor[idx].color
    }

    #[test]
    fn floor_triangle_count() {
        for (width, depth) in [(1, 1), (2, 3), (5, 4)] {
            let floor = generate_floor(&colors(), Point::zero(), 1.0, width, depth).unwrap();
            assert_eq!(floor.len(), 2 * (width * depth) as usize);
        }
    }

    #[test]
    fn two_by_two_scenario() {
        let floor = generate_floor(&colors(), Point::zero(), 1.0, 2, 2).unwrap();
        assert_eq!(floor.len(), 8);
        assert_eq!(cell_color(&floor, 2, 0, 0), "black");
        assert_eq!(cell_color(&floor, 2, 1, 0), "white");
        assert_eq!(cell_color(&floor, 2, 0, 1), "white");
        assert_eq!(cell_color(&floor, 2, 1, 1), "black");
    }

    #[test]
    fn neighbours_alternate() {
        let (width, depth) = (4, 5);
        let floor = generate_floor(&colors(), Point::new(-1.0, 2.0, 3.0), 0.5, width, depth).unwrap();
        for i in 0..width {
            for j in 0..depth {
                let color = cell_color(&floor, depth, i, j);
                if i + 1 < width {
                    assert_ne!(color, cell_color(&floor, depth, i + 1, j));
                }
                if j + 1 < depth {
                    assert_ne!(color, cell_color(&floor, depth, i, j + 1));
                }
            }
        }
    }

    #[test]
    fn floor_cell_geometry_and_order() {
        let origin = Point::new(1.0, -2.0, 3.0);
        let floor = generate_floor(&colors(), origin, 2.0, 2, 1).unwrap();

        assert_eq!(floor[0], Triangle::new(
            Point::new(1.0, -2.0, 3.0), Point::new(3.0, -2.0, 3.0), Point::new(3.0, -2.0, 5.0), "black"));
        assert_eq!(floor[1], Triangle::new(
            Point::new(1.0, -2.0, 3.0), Point::new(1.0, -2.0, 5.0), Point::new(3.0, -2.0, 5.0), "black"));
        // Second cell is one step along x
        assert_eq!(floor[2].a, Point::new(3.0, -2.0, 3.0));
        assert_eq!(floor[2].color, "white");
        assert!(floor.iter().all(|tri| tri.reflectiveness == REFLECTIVENESS));
    }

    #[test]
    fn negative_zero_corner_matches_container() {
        let origin = Point::new(-0.0, -0.0, 0.0);
        let floor = generate_floor(&colors(), origin, 1.0, 1, 1).unwrap();
        let container = Container::around_floor(origin, 1.0, 1.0);

        for tri in &floor {
            assert!(tri.a.x.is_sign_negative() && tri.a.y.is_sign_negative());
            assert!(tri.b.y.is_sign_negative() && tri.c.y.is_sign_negative());
        }
        assert_eq!(floor[1].b.x.to_bits(), container.d.x.to_bits());
        assert_eq!(floor[0].a.y.to_bits(), container.a.y.to_bits());
    }

    #[test]
    fn empty_grid() {
        assert!(generate_floor(&colors(), Point::zero(), 1.0, 0, 3).unwrap().is_empty());
        assert!(generate_floor(&colors(), Point::zero(), 1.0, 3, 0).unwrap().is_empty());
    }

    #[test]
    fn bad_tile_size() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(generate_floor(&colors(), Point::zero(), size, 2, 2).is_err());
        }
    }

    #[test]
    fn zero_ceiling_gives_no_walls() {
        let walls = generate_walls("grey", Point::zero(), 2.0, 2.0, 0.0).unwrap();
        assert!(walls.is_empty());
    }

    #[test]
    fn five_wall_quads() {
        let walls = generate_walls("grey", Point::zero(), 2.0, 3.0, 4.0).unwrap();
        assert_eq!(walls.len(), 10);
        assert!(walls.iter().all(|tri| tri.color == "grey"));

        // Ceiling quad is last and flat at the ceiling height
        for tri in &walls[8..] {
            assert_eq!((tri.a.y, tri.b.y, tri.c.y), (4.0, 4.0, 4.0));
        }
        // Far x wall stays on x = max_x
        for tri in &walls[4..6] {
            assert_eq!((tri.a.x, tri.b.x, tri.c.x), (2.0, 2.0, 2.0));
        }
    }

    #[test]
    fn quad_flat_in_z() {
        let quad = Quad::from_diagonal(Point::new(0.0, 0.0, 1.0), Point::new(2.0, 3.0, 1.0)).unwrap();
        assert_eq!(quad.corners[1], Point::new(2.0, 0.0, 1.0));
        assert_eq!(quad.corners[3], Point::new(0.0, 3.0, 1.0));
    }

    #[test]
    fn quad_flat_in_x() {
        let quad = Quad::from_diagonal(Point::new(1.0, 0.0, 0.0), Point::new(1.0, 3.0, 2.0)).unwrap();
        assert_eq!(quad.corners[1], Point::new(1.0, 0.0, 2.0));
        assert_eq!(quad.corners[3], Point::new(1.0, 3.0, 0.0));

        let [first, second] = quad.triangles("red");
        assert_eq!((first.a, first.b, first.c), (quad.corners[0], quad.corners[1], quad.corners[2]));
        assert_eq!((second.a, second.b, second.c), (quad.corners[2], quad.corners[3], quad.corners[0]));
    }

    #[test]
    fn quad_not_axis_aligned() {
        let result = aab_quad("red", Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
        assert!(matches!(result, Err(TileError::StringOnly(_))));
    }

    #[test]
    fn container_corners() {
        let container = Container::around_floor(Point::new(1.0, 2.0, 3.0), 4.0, 5.0);
        assert_eq!(container.b, Point::new(4.0, 2.0, 3.0));
        assert_eq!(container.c, Point::new(4.0, 2.0, 5.0));
        assert_eq!(container.d, Point::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn scene_is_deterministic() {
        let tiles = TileArgs::example();
        assert_eq!(build_scene(&tiles).unwrap(), build_scene(&tiles).unwrap());
    }

    #[test]
    fn scene_without_container() {
        let mut tiles = TileArgs::example();
        tiles.container = false;
        tiles.ceiling = None;
        let scene = build_scene(&tiles).unwrap();
        assert!(scene.container.is_none());
        assert!(scene.walls.is_empty());
        assert_eq!(scene.triangle_count(), 2 * (tiles.width * tiles.depth) as usize);
    }
}
