use cgmath::Vector3;
use log::info;
use rand::Rng;

use crate::gfx::camera::{CameraMode, CameraPose};

use super::{
    color::Color,
    draw_list::{CubeDraw, DrawList, PlaneDraw},
};

/// Footprint of the ground plane and length of the walls
pub const GROUND_SIZE: f32 = 32.0;
/// Columns are placed at integer x/z coordinates within this bound
pub const COLUMN_EXTENT: i32 = 15;
pub const MIN_COLUMN_HEIGHT: i32 = 1;
pub const MAX_COLUMN_HEIGHT: i32 = 12;
/// Columns are square in plan view
pub const COLUMN_WIDTH: f32 = 2.0;
/// Edge length of the cube marking the target in third person
pub const PLAYER_CUBE_SIZE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub height: f32,
    /// Centre of the column; `y` is half the height so it stands on the ground
    pub position: Vector3<f32>,
    pub color: Color,
}

impl Column {
    /// Random draws happen in a fixed order: height, x, z, red, green.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let height = rng.random_range(MIN_COLUMN_HEIGHT..=MAX_COLUMN_HEIGHT) as f32;
        let x = rng.random_range(-COLUMN_EXTENT..=COLUMN_EXTENT) as f32;
        let z = rng.random_range(-COLUMN_EXTENT..=COLUMN_EXTENT) as f32;
        let r = rng.random_range(20..=255u8);
        let g = rng.random_range(10..=55u8);

        Self {
            height,
            position: Vector3::new(x, height / 2.0, z),
            color: Color::new(r, g, 30, 255),
        }
    }

    fn size(&self) -> Vector3<f32> {
        Vector3::new(COLUMN_WIDTH, self.height, COLUMN_WIDTH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub center: Vector3<f32>,
    pub size: Vector3<f32>,
    pub color: Color,
}

/// The three boundary walls: blue on the left, lime on the right, gold at the back
pub fn boundary_walls() -> [Wall; 3] {
    [
        Wall {
            center: Vector3::new(-16.0, 2.5, 0.0),
            size: Vector3::new(1.0, 5.0, GROUND_SIZE),
            color: Color::BLUE,
        },
        Wall {
            center: Vector3::new(16.0, 2.5, 0.0),
            size: Vector3::new(1.0, 5.0, GROUND_SIZE),
            color: Color::LIME,
        },
        Wall {
            center: Vector3::new(0.0, 2.5, 16.0),
            size: Vector3::new(GROUND_SIZE, 5.0, 1.0),
            color: Color::GOLD,
        },
    ]
}

/// Static world: ground, walls and columns. Generated once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub ground: PlaneDraw,
    pub walls: [Wall; 3],
    pub columns: Vec<Column>,
}

impl Scene {
    /// Creates a scene with `column_count` columns from the thread RNG
    pub fn new(column_count: usize) -> Self {
        Self::generate(column_count, &mut rand::rng())
    }

    pub fn generate<R: Rng + ?Sized>(column_count: usize, rng: &mut R) -> Self {
        let columns: Vec<Column> = (0..column_count).map(|_| Column::random(rng)).collect();
        info!("Generated scene with {} columns", columns.len());

        Self {
            ground: PlaneDraw {
                center: Vector3::new(0.0, 0.0, 0.0),
                size: (GROUND_SIZE, GROUND_SIZE),
                color: Color::LIGHT_GRAY,
            },
            walls: boundary_walls(),
            columns,
        }
    }

    /// Primitives to draw this frame for the given camera
    pub fn draw_list(&self, mode: CameraMode, pose: &CameraPose) -> DrawList {
        let mut list = DrawList::default();
        list.planes.push(self.ground);

        for wall in &self.walls {
            list.cubes.push(CubeDraw {
                center: wall.center,
                size: wall.size,
                color: wall.color,
            });
        }

        for column in &self.columns {
            list.cubes.push(CubeDraw {
                center: column.position,
                size: column.size(),
                color: column.color,
            });
            list.wires.push(CubeDraw {
                center: column.position,
                size: column.size(),
                color: Color::MAROON,
            });
        }

        // Player cube
        if mode == CameraMode::ThirdPerson {
            let size = Vector3::new(PLAYER_CUBE_SIZE, PLAYER_CUBE_SIZE, PLAYER_CUBE_SIZE);
            list.cubes.push(CubeDraw {
                center: pose.target,
                size,
                color: Color::PURPLE,
            });
            list.wires.push(CubeDraw {
                center: pose.target,
                size,
                color: Color::DARK_PURPLE,
            });
        }

        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_columns_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let scene = Scene::generate(20, &mut rng);
        assert_eq!(scene.columns.len(), 20);

        for column in &scene.columns {
            assert!((1.0..=12.0).contains(&column.height));
            assert_eq!(column.height.fract(), 0.0);
            assert!((-15.0..=15.0).contains(&column.position.x));
            assert!((-15.0..=15.0).contains(&column.position.z));
            assert_eq!(column.position.y, column.height / 2.0);
            assert!(column.color.r >= 20);
            assert!((10..=55).contains(&column.color.g));
            assert_eq!(column.color.b, 30);
            assert_eq!(column.color.a, 255);
        }
    }

    #[test]
    fn test_same_seed_same_scene() {
        let a = Scene::generate(20, &mut StdRng::seed_from_u64(7));
        let b = Scene::generate(20, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_list_contents() {
        let scene = Scene::generate(20, &mut StdRng::seed_from_u64(1));
        let pose = CameraPose::default();

        let list = scene.draw_list(CameraMode::FirstPerson, &pose);
        assert_eq!(list.planes.len(), 1);
        assert_eq!(list.cubes.len(), 3 + 20);
        assert_eq!(list.wires.len(), 20);
        assert!(list.wires.iter().all(|w| w.color == Color::MAROON));
    }

    #[test]
    fn test_player_cube_only_in_third_person() {
        let scene = Scene::generate(5, &mut StdRng::seed_from_u64(1));
        let pose = CameraPose::default();

        for mode in CameraMode::ALL {
            let list = scene.draw_list(mode, &pose);
            let has_player = list.cubes.iter().any(|c| c.color == Color::PURPLE && c.center == pose.target);
            assert_eq!(has_player, mode == CameraMode::ThirdPerson);
        }
    }
}
