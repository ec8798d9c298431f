use delve_geom::Vec3;

/// Cube face, named by its outward direction in grid space.
///
/// Grid `+Y` points deeper, which is world `-Y`; [`Face::normal`] accounts for it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Integer grid delta `(dx,dy,dz)` when stepping out through this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// World-space unit normal.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, -(dy as f32), dz as f32)
    }

    /// The four world-space corners of this face for the cell anchored at
    /// `base`, in cyclic order. The cell spans `base..base + 1` on every axis.
    pub fn corners(self, base: Vec3) -> [Vec3; 4] {
        let (x0, y0, z0) = (base.x, base.y, base.z);
        let (x1, y1, z1) = (x0 + 1.0, y0 + 1.0, z0 + 1.0);
        let v = Vec3::new;
        match self {
            Face::PosX => [v(x1, y0, z0), v(x1, y1, z0), v(x1, y1, z1), v(x1, y0, z1)],
            Face::NegX => [v(x0, y0, z0), v(x0, y0, z1), v(x0, y1, z1), v(x0, y1, z0)],
            // Deeper neighbor sits below: the face lies on the cell's lower plane.
            Face::PosY => [v(x0, y0, z0), v(x1, y0, z0), v(x1, y0, z1), v(x0, y0, z1)],
            Face::NegY => [v(x0, y1, z0), v(x0, y1, z1), v(x1, y1, z1), v(x1, y1, z0)],
            Face::PosZ => [v(x0, y0, z1), v(x1, y0, z1), v(x1, y1, z1), v(x0, y1, z1)],
            Face::NegZ => [v(x0, y0, z0), v(x0, y1, z0), v(x1, y1, z0), v(x1, y0, z0)],
        }
    }
}
