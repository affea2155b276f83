//! Icosahedron face geometry: projection between the sphere and face-local
//! lattices, overage correction across face edges, and boundary generation.

use crate::constants::{
  AP7_ROT_RADS, EPSILON, INV_RES0_U_GNOMONIC, MAX_BOUNDARY_VERTS, MAX_RES, NUM_HEX_VERTS, NUM_ICOSA_FACES,
  NUM_PENT_VERTS, RES0_U_GNOMONIC, RSQRT7, SIN60, SQRT7,
};
use crate::math::numerics::{is_class_iii, normalize_radians};
use crate::math::spherical::{azimuth_rads, point_at_azimuth};
use crate::math::vec2d::line_intersection;
use crate::types::{CoordIjk, FaceIjk, GeoBoundary, GeoCoord, Vec2d, Vec3d};

/// Index of the ij quadrant entry in a face's neighbor table.
pub(crate) const IJ: usize = 1;
/// Index of the ki quadrant entry in a face's neighbor table.
pub(crate) const KI: usize = 2;
/// Index of the jk quadrant entry in a face's neighbor table.
pub(crate) const JK: usize = 3;

/// Invalid face sentinel.
pub(crate) const INVALID_FACE: i32 = -1;

/// Outcome of an overage adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// The coordinate lies on its original face.
  None,
  /// The coordinate lies on a face edge (substrate grids only).
  FaceEdge,
  /// The coordinate has been moved onto a new face.
  NewFace,
}

/// Icosahedron face centers in lat/lng radians.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_GEO: [GeoCoord; NUM_ICOSA_FACES as usize] = [
  GeoCoord { lat: 0.803_582_649_718_989_94, lng: 1.248_397_419_617_396 },     // face 0
  GeoCoord { lat: 1.307_747_883_455_638_2, lng: 2.536_945_009_877_921 },      // face 1
  GeoCoord { lat: 1.054_751_253_523_952, lng: -1.347_517_358_900_396_6 },     // face 2
  GeoCoord { lat: 0.600_191_595_538_186_8, lng: -0.450_603_909_469_755_75 },  // face 3
  GeoCoord { lat: 0.491_715_428_198_773_87, lng: 0.401_988_202_911_306_94 },  // face 4
  GeoCoord { lat: 0.172_745_327_415_618_7, lng: 1.678_146_885_280_433_7 },    // face 5
  GeoCoord { lat: 0.605_929_321_571_350_7, lng: 2.953_923_329_812_411_6 },    // face 6
  GeoCoord { lat: 0.427_370_518_328_979_64, lng: -1.888_876_200_336_285_4 },  // face 7
  GeoCoord { lat: -0.079_066_118_549_212_83, lng: -0.733_429_513_380_867_74 },// face 8
  GeoCoord { lat: -0.230_961_644_455_383_64, lng: 0.506_495_587_332_349 },    // face 9
  GeoCoord { lat: 0.079_066_118_549_212_83, lng: 2.408_163_140_208_925_5 },   // face 10
  GeoCoord { lat: 0.230_961_644_455_383_64, lng: -2.635_097_066_257_444 },    // face 11
  GeoCoord { lat: -0.172_745_327_415_618_7, lng: -1.463_445_768_309_359_5 },  // face 12
  GeoCoord { lat: -0.605_929_321_571_350_7, lng: -0.187_669_323_777_381_62 }, // face 13
  GeoCoord { lat: -0.427_370_518_328_979_64, lng: 1.252_716_453_253_508 },    // face 14
  GeoCoord { lat: -0.600_191_595_538_186_8, lng: 2.690_988_744_120_037_5 },   // face 15
  GeoCoord { lat: -0.491_715_428_198_773_87, lng: -2.739_604_450_678_486_3 }, // face 16
  GeoCoord { lat: -0.803_582_649_718_989_94, lng: -1.893_195_233_972_397 },   // face 17
  GeoCoord { lat: -1.307_747_883_455_638_2, lng: -0.604_647_643_711_872_1 },  // face 18
  GeoCoord { lat: -1.054_751_253_523_952, lng: 1.794_075_294_689_396_6 },     // face 19
];

/// Icosahedron face centers as unit-sphere points.
#[rustfmt::skip]
static FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES as usize] = [
  Vec3d { x: 0.219_930_779_140_460_6, y: 0.658_369_178_027_499_6, z: 0.719_847_537_892_618_2 },     // face 0
  Vec3d { x: -0.213_923_483_450_142_1, y: 0.147_817_182_955_070_3, z: 0.965_601_793_521_420_5 },    // face 1
  Vec3d { x: 0.109_262_527_878_479_7, y: -0.481_195_157_287_321, z: 0.869_777_512_128_725_3 },      // face 2
  Vec3d { x: 0.742_856_730_158_679_1, y: -0.359_394_167_827_802_8, z: 0.564_800_593_651_703_3 },    // face 3
  Vec3d { x: 0.811_253_470_914_096_9, y: 0.344_895_323_763_938_4, z: 0.472_138_773_641_393 },       // face 4
  Vec3d { x: -0.105_549_814_961_392_1, y: 0.979_445_729_641_141_3, z: 0.171_887_461_000_936_5 },    // face 5
  Vec3d { x: -0.807_540_757_997_009_2, y: 0.153_355_248_589_881_8, z: 0.569_526_199_488_268_8 },    // face 6
  Vec3d { x: -0.284_614_806_978_790_7, y: -0.864_408_097_265_420_6, z: 0.414_479_255_247_354 },     // face 7
  Vec3d { x: 0.740_562_147_385_448_2, y: -0.667_329_956_456_552_4, z: -0.078_983_764_632_673_77 },  // face 8
  Vec3d { x: 0.851_230_398_647_429_3, y: 0.472_234_378_858_268_1, z: -0.228_913_738_868_780_8 },    // face 9
  Vec3d { x: -0.740_562_147_385_448_1, y: 0.667_329_956_456_552_4, z: 0.078_983_764_632_673_77 },   // face 10
  Vec3d { x: -0.851_230_398_647_429_2, y: -0.472_234_378_858_268_2, z: 0.228_913_738_868_780_8 },   // face 11
  Vec3d { x: 0.105_549_814_961_391_9, y: -0.979_445_729_641_141_3, z: -0.171_887_461_000_936_5 },   // face 12
  Vec3d { x: 0.807_540_757_997_009_2, y: -0.153_355_248_589_881_9, z: -0.569_526_199_488_268_8 },   // face 13
  Vec3d { x: 0.284_614_806_978_790_8, y: 0.864_408_097_265_420_4, z: -0.414_479_255_247_354 },      // face 14
  Vec3d { x: -0.742_856_730_158_679_1, y: 0.359_394_167_827_802_7, z: -0.564_800_593_651_703_3 },   // face 15
  Vec3d { x: -0.811_253_470_914_097_1, y: -0.344_895_323_763_938_2, z: -0.472_138_773_641_393 },    // face 16
  Vec3d { x: -0.219_930_779_140_460_7, y: -0.658_369_178_027_499_6, z: -0.719_847_537_892_618_2 },  // face 17
  Vec3d { x: 0.213_923_483_450_142, y: -0.147_817_182_955_070_4, z: -0.965_601_793_521_420_5 },     // face 18
  Vec3d { x: -0.109_262_527_878_479_6, y: 0.481_195_157_287_321, z: -0.869_777_512_128_725_3 },     // face 19
];

/// Azimuth in radians from each face center to topological vertex 0 on the
/// Class II grid (the i axis of that face's coordinate system).
#[rustfmt::skip]
static FACE_AXES_AZ_CII: [f64; NUM_ICOSA_FACES as usize] = [
  5.619_958_268_523_94,    // face 0
  5.760_339_081_714_187,   // face 1
  0.780_213_654_393_430_1, // face 2
  0.430_469_363_979_999_9, // face 3
  6.130_269_123_335_111,   // face 4
  2.692_877_706_530_643,   // face 5
  2.982_963_003_477_244,   // face 6
  3.532_912_002_790_141,   // face 7
  3.494_305_004_259_568,   // face 8
  3.003_214_169_499_538_4, // face 9
  5.930_472_956_509_811_6, // face 10
  0.138_378_484_090_254_85,// face 11
  0.448_714_947_059_150_36,// face 12
  0.158_629_650_112_549_36,// face 13
  5.891_865_957_979_238_5, // face 14
  2.711_123_289_609_793_3, // face 15
  3.294_508_837_434_268,   // face 16
  3.804_819_692_245_44,    // face 17
  3.664_438_879_055_192_4, // face 18
  2.361_378_999_196_363,   // face 19
];

/// How to re-express coordinates in an adjacent face's IJK system.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrient {
  /// The adjacent face.
  pub(crate) face: i32,
  /// Resolution-0 translation relative to the primary face.
  pub(crate) translate: CoordIjk,
  /// 60-degree ccw rotations relative to the primary face.
  pub(crate) ccw_rot60: i32,
}

const fn fo(face: i32, i: i32, j: i32, k: i32, ccw_rot60: i32) -> FaceOrient {
  FaceOrient {
    face,
    translate: CoordIjk { i, j, k },
    ccw_rot60,
  }
}

/// Neighboring faces of each face: the central entry followed by the ij,
/// ki and jk quadrant entries.
#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[FaceOrient; 4]; NUM_ICOSA_FACES as usize] = [
  [fo(0, 0, 0, 0, 0), fo(4, 2, 0, 2, 1), fo(1, 2, 2, 0, 5), fo(5, 0, 2, 2, 3)],    // face 0
  [fo(1, 0, 0, 0, 0), fo(0, 2, 0, 2, 1), fo(2, 2, 2, 0, 5), fo(6, 0, 2, 2, 3)],    // face 1
  [fo(2, 0, 0, 0, 0), fo(1, 2, 0, 2, 1), fo(3, 2, 2, 0, 5), fo(7, 0, 2, 2, 3)],    // face 2
  [fo(3, 0, 0, 0, 0), fo(2, 2, 0, 2, 1), fo(4, 2, 2, 0, 5), fo(8, 0, 2, 2, 3)],    // face 3
  [fo(4, 0, 0, 0, 0), fo(3, 2, 0, 2, 1), fo(0, 2, 2, 0, 5), fo(9, 0, 2, 2, 3)],    // face 4
  [fo(5, 0, 0, 0, 0), fo(10, 2, 2, 0, 3), fo(14, 2, 0, 2, 3), fo(0, 0, 2, 2, 3)],  // face 5
  [fo(6, 0, 0, 0, 0), fo(11, 2, 2, 0, 3), fo(10, 2, 0, 2, 3), fo(1, 0, 2, 2, 3)],  // face 6
  [fo(7, 0, 0, 0, 0), fo(12, 2, 2, 0, 3), fo(11, 2, 0, 2, 3), fo(2, 0, 2, 2, 3)],  // face 7
  [fo(8, 0, 0, 0, 0), fo(13, 2, 2, 0, 3), fo(12, 2, 0, 2, 3), fo(3, 0, 2, 2, 3)],  // face 8
  [fo(9, 0, 0, 0, 0), fo(14, 2, 2, 0, 3), fo(13, 2, 0, 2, 3), fo(4, 0, 2, 2, 3)],  // face 9
  [fo(10, 0, 0, 0, 0), fo(5, 2, 2, 0, 3), fo(6, 2, 0, 2, 3), fo(15, 0, 2, 2, 3)],  // face 10
  [fo(11, 0, 0, 0, 0), fo(6, 2, 2, 0, 3), fo(7, 2, 0, 2, 3), fo(16, 0, 2, 2, 3)],  // face 11
  [fo(12, 0, 0, 0, 0), fo(7, 2, 2, 0, 3), fo(8, 2, 0, 2, 3), fo(17, 0, 2, 2, 3)],  // face 12
  [fo(13, 0, 0, 0, 0), fo(8, 2, 2, 0, 3), fo(9, 2, 0, 2, 3), fo(18, 0, 2, 2, 3)],  // face 13
  [fo(14, 0, 0, 0, 0), fo(9, 2, 2, 0, 3), fo(5, 2, 0, 2, 3), fo(19, 0, 2, 2, 3)],  // face 14
  [fo(15, 0, 0, 0, 0), fo(16, 2, 0, 2, 1), fo(19, 2, 2, 0, 5), fo(10, 0, 2, 2, 3)],// face 15
  [fo(16, 0, 0, 0, 0), fo(17, 2, 0, 2, 1), fo(15, 2, 2, 0, 5), fo(11, 0, 2, 2, 3)],// face 16
  [fo(17, 0, 0, 0, 0), fo(18, 2, 0, 2, 1), fo(16, 2, 2, 0, 5), fo(12, 0, 2, 2, 3)],// face 17
  [fo(18, 0, 0, 0, 0), fo(19, 2, 0, 2, 1), fo(17, 2, 2, 0, 5), fo(13, 0, 2, 2, 3)],// face 18
  [fo(19, 0, 0, 0, 0), fo(15, 2, 0, 2, 1), fo(18, 2, 2, 0, 5), fo(14, 0, 2, 2, 3)],// face 19
];

/// Quadrant direction (an index into `FACE_NEIGHBORS`) from one face to an
/// adjacent face, or -1 when not adjacent. Derived from `FACE_NEIGHBORS`.
#[rustfmt::skip]
pub(crate) static ADJACENT_FACE_DIR: [[i32; NUM_ICOSA_FACES as usize]; NUM_ICOSA_FACES as usize] = [
  // to:        0   1   2   3   4   5   6   7   8   9  10  11  12  13  14  15  16  17  18  19
  /* from 0 */ [0,  2, -1, -1,  1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  /* from 1 */ [1,  0,  2, -1, -1, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  /* from 2 */ [-1, 1,  0,  2, -1, -1, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  /* from 3 */ [-1, -1, 1,  0,  2, -1, -1, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  /* from 4 */ [2, -1, -1,  1,  0, -1, -1, -1, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  /* from 5 */ [3, -1, -1, -1, -1,  0, -1, -1, -1, -1,  1, -1, -1, -1,  2, -1, -1, -1, -1, -1],
  /* from 6 */ [-1, 3, -1, -1, -1, -1,  0, -1, -1, -1,  2,  1, -1, -1, -1, -1, -1, -1, -1, -1],
  /* from 7 */ [-1, -1, 3, -1, -1, -1, -1,  0, -1, -1, -1,  2,  1, -1, -1, -1, -1, -1, -1, -1],
  /* from 8 */ [-1, -1, -1, 3, -1, -1, -1, -1,  0, -1, -1, -1,  2,  1, -1, -1, -1, -1, -1, -1],
  /* from 9 */ [-1, -1, -1, -1, 3, -1, -1, -1, -1,  0, -1, -1, -1,  2,  1, -1, -1, -1, -1, -1],
  /* from 10 */[-1, -1, -1, -1, -1, 1,  2, -1, -1, -1,  0, -1, -1, -1, -1,  3, -1, -1, -1, -1],
  /* from 11 */[-1, -1, -1, -1, -1, -1, 1,  2, -1, -1, -1,  0, -1, -1, -1, -1,  3, -1, -1, -1],
  /* from 12 */[-1, -1, -1, -1, -1, -1, -1, 1,  2, -1, -1, -1,  0, -1, -1, -1, -1,  3, -1, -1],
  /* from 13 */[-1, -1, -1, -1, -1, -1, -1, -1, 1,  2, -1, -1, -1,  0, -1, -1, -1, -1,  3, -1],
  /* from 14 */[-1, -1, -1, -1, -1, 2, -1, -1, -1, 1, -1, -1, -1, -1,  0, -1, -1, -1, -1,  3],
  /* from 15 */[-1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  3, -1, -1, -1, -1,  0,  1, -1, -1,  2],
  /* from 16 */[-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  3, -1, -1, -1,  2,  0,  1, -1, -1],
  /* from 17 */[-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  3, -1, -1, -1,  2,  0,  1, -1],
  /* from 18 */[-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  3, -1, -1, -1,  2,  0,  1],
  /* from 19 */[-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  3,  1, -1, -1,  2,  0],
];

/// Largest IJK component sum on a face per Class II resolution. Class III
/// resolutions use the next finer Class II entry, so index 16 exists for
/// resolution 15.
#[rustfmt::skip]
static MAX_DIM_BY_CII_RES: [i32; (MAX_RES + 2) as usize] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Lattice unit scale per Class II resolution.
#[rustfmt::skip]
static UNIT_SCALE_BY_CII_RES: [i32; (MAX_RES + 2) as usize] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// The face whose center is closest to the given point, and the squared 3D
/// chord distance to it.
fn closest_face(geo: &GeoCoord) -> (i32, f64) {
  let point = Vec3d::from_geo(geo);
  let mut face = 0;
  let mut sqd = 5.0;
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let d = center.square_dist(&point);
    if d < sqd {
      face = f as i32;
      sqd = d;
    }
  }
  (face, sqd)
}

/// Projects a spherical coordinate onto the closest face as gnomonic-scaled
/// 2D coordinates at the given resolution.
pub(crate) fn geo_to_hex2d(geo: &GeoCoord, res: i32) -> (i32, Vec2d) {
  let (face, sqd) = closest_face(geo);

  // cos(r) = 1 - 2 sin^2(r/2) = 1 - sqd/2
  let r = (1.0 - sqd / 2.0).clamp(-1.0, 1.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  let az = azimuth_rads(&FACE_CENTER_GEO[face as usize], geo);
  let mut theta = normalize_radians(FACE_AXES_AZ_CII[face as usize] - normalize_radians(az));
  if is_class_iii(res) {
    theta = normalize_radians(theta - AP7_ROT_RADS);
  }

  // gnomonic projection and scaling to the target resolution
  let mut r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= SQRT7;
  }

  (face, Vec2d::new(r * theta.cos(), r * theta.sin()))
}

/// Inverts the gnomonic projection for face-local 2D coordinates.
pub(crate) fn hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> GeoCoord {
  let mut r = v.mag();
  if r < EPSILON {
    return FACE_CENTER_GEO[face as usize];
  }

  let mut theta = v.y.atan2(v.x);

  for _ in 0..res {
    r *= RSQRT7;
  }
  if substrate {
    r /= 3.0;
    if is_class_iii(res) {
      r *= RSQRT7;
    }
  }

  r = (r * RES0_U_GNOMONIC).atan();

  // substrate coordinates are already Class II oriented
  if !substrate && is_class_iii(res) {
    theta = normalize_radians(theta + AP7_ROT_RADS);
  }
  let az = normalize_radians(FACE_AXES_AZ_CII[face as usize] - theta);

  point_at_azimuth(&FACE_CENTER_GEO[face as usize], az, r)
}

/// Projects a spherical coordinate into a face IJK address at `res`.
pub(crate) fn geo_to_face_ijk(geo: &GeoCoord, res: i32) -> FaceIjk {
  let (face, v) = geo_to_hex2d(geo, res);
  FaceIjk {
    face,
    coord: CoordIjk::from_hex2d(&v),
  }
}

/// The center of a face IJK address on the sphere.
pub(crate) fn face_ijk_to_geo(fijk: &FaceIjk, res: i32) -> GeoCoord {
  hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, res, false)
}

/// Moves a coordinate that has spilled over its face's edge onto the
/// appropriate neighboring face.
///
/// `pent_leading_4` applies the missing-sequence rotation for pentagon
/// cells with a leading digit of 4; `substrate` selects the triple-scaled
/// vertex grid.
pub(crate) fn adjust_overage_class_ii(
  fijk: &mut FaceIjk,
  res: i32,
  pent_leading_4: bool,
  substrate: bool,
) -> Overage {
  let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
  if substrate {
    max_dim *= 3;
  }

  let sum = fijk.coord.i + fijk.coord.j + fijk.coord.k;
  if substrate && sum == max_dim {
    return Overage::FaceEdge;
  }
  if sum <= max_dim {
    return Overage::None;
  }

  let orient: &FaceOrient;
  if fijk.coord.k > 0 {
    if fijk.coord.j > 0 {
      orient = &FACE_NEIGHBORS[fijk.face as usize][JK];
    } else {
      orient = &FACE_NEIGHBORS[fijk.face as usize][KI];

      if pent_leading_4 {
        // rotate out of the missing k-axes sub-sequence about the
        // pentagon corner of the face triangle
        let origin = CoordIjk::new(max_dim, 0, 0);
        fijk.coord = fijk.coord.sub(origin).rotate60_cw().add(origin);
      }
    }
  } else {
    orient = &FACE_NEIGHBORS[fijk.face as usize][IJ];
  }

  fijk.face = orient.face;

  let mut coord = fijk.coord;
  for _ in 0..orient.ccw_rot60 {
    coord = coord.rotate60_ccw();
  }

  let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
  if substrate {
    unit_scale *= 3;
  }
  fijk.coord = coord.add(orient.translate.scale(unit_scale)).normalize();

  // overage points on pentagon boundaries can end up on edges
  if substrate && fijk.coord.i + fijk.coord.j + fijk.coord.k == max_dim {
    Overage::FaceEdge
  } else {
    Overage::NewFace
  }
}

/// Repeats the overage adjustment for a pentagon vertex until it stops
/// landing on new faces.
pub(crate) fn adjust_pent_vert_overage(fijk: &mut FaceIjk, res: i32) -> Overage {
  loop {
    let overage = adjust_overage_class_ii(fijk, res, false, true);
    if overage != Overage::NewFace {
      return overage;
    }
  }
}

// Vertex offsets of a cell center on the substrate grid, Class II and
// Class III variants, counter-clockwise from topological vertex 0.
#[rustfmt::skip]
const HEX_VERTS_CII: [CoordIjk; NUM_HEX_VERTS] = [
  CoordIjk { i: 2, j: 1, k: 0 }, CoordIjk { i: 1, j: 2, k: 0 },
  CoordIjk { i: 0, j: 2, k: 1 }, CoordIjk { i: 0, j: 1, k: 2 },
  CoordIjk { i: 1, j: 0, k: 2 }, CoordIjk { i: 2, j: 0, k: 1 },
];
#[rustfmt::skip]
const HEX_VERTS_CIII: [CoordIjk; NUM_HEX_VERTS] = [
  CoordIjk { i: 5, j: 4, k: 0 }, CoordIjk { i: 1, j: 5, k: 0 },
  CoordIjk { i: 0, j: 5, k: 4 }, CoordIjk { i: 0, j: 1, k: 5 },
  CoordIjk { i: 4, j: 0, k: 5 }, CoordIjk { i: 5, j: 0, k: 1 },
];

/// Computes the substrate-grid vertices of a hexagonal cell. The center
/// coordinate and resolution are adjusted to the substrate grid in place.
pub(crate) fn cell_to_verts(fijk: &mut FaceIjk, res: &mut i32) -> [FaceIjk; NUM_HEX_VERTS] {
  let verts = if is_class_iii(*res) { &HEX_VERTS_CIII } else { &HEX_VERTS_CII };

  // the substrate grid is an aperture-3-then-3 subdivision, plus one
  // aperture-7 step for Class III so the vertices land on a Class II grid
  fijk.coord = fijk.coord.down_ap3().down_ap3r();
  if is_class_iii(*res) {
    fijk.coord = fijk.coord.down_ap7r();
    *res += 1;
  }

  let mut out = [FaceIjk::default(); NUM_HEX_VERTS];
  for (vert, offset) in out.iter_mut().zip(verts.iter()) {
    vert.face = fijk.face;
    vert.coord = fijk.coord.add(*offset).normalize();
  }
  out
}

/// Computes the substrate-grid vertices of a pentagonal cell.
pub(crate) fn pent_to_verts(fijk: &mut FaceIjk, res: &mut i32) -> [FaceIjk; NUM_PENT_VERTS] {
  let verts: [CoordIjk; NUM_PENT_VERTS] = if is_class_iii(*res) {
    [HEX_VERTS_CIII[0], HEX_VERTS_CIII[1], HEX_VERTS_CIII[2], HEX_VERTS_CIII[3], HEX_VERTS_CIII[4]]
  } else {
    [HEX_VERTS_CII[0], HEX_VERTS_CII[1], HEX_VERTS_CII[2], HEX_VERTS_CII[3], HEX_VERTS_CII[4]]
  };

  fijk.coord = fijk.coord.down_ap3().down_ap3r();
  if is_class_iii(*res) {
    fijk.coord = fijk.coord.down_ap7r();
    *res += 1;
  }

  let mut out = [FaceIjk::default(); NUM_PENT_VERTS];
  for (vert, offset) in out.iter_mut().zip(verts.iter()) {
    vert.face = fijk.face;
    vert.coord = fijk.coord.add(*offset).normalize();
  }
  out
}

/// The face-triangle corners in substrate 2D coordinates at `adj_res`.
fn icosa_edge_verts(adj_res: i32) -> [Vec2d; 3] {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[adj_res as usize]);
  [
    Vec2d::new(3.0 * max_dim, 0.0),
    Vec2d::new(-1.5 * max_dim, 3.0 * SIN60 * max_dim),
    Vec2d::new(-1.5 * max_dim, -3.0 * SIN60 * max_dim),
  ]
}

/// Generates the boundary of a hexagonal cell, `length` topological
/// vertices starting at `start`, inserting distortion vertices where edges
/// cross icosahedron edges.
pub(crate) fn cell_boundary(fijk: &FaceIjk, res: i32, start: usize, length: usize) -> GeoBoundary {
  let mut center = *fijk;
  let mut adj_res = res;
  let verts = cell_to_verts(&mut center, &mut adj_res);

  // one extra iteration when returning the whole loop, to catch a
  // distortion vertex on the last edge
  let additional = usize::from(length == NUM_HEX_VERTS);

  let mut boundary = GeoBoundary::default();
  let mut last_fijk = FaceIjk::default();
  let mut last_overage = Overage::None;

  for vert in start..(start + length + additional) {
    let v = vert % NUM_HEX_VERTS;

    let mut adjusted = verts[v];
    let overage = adjust_overage_class_ii(&mut adjusted, adj_res, false, true);

    /*
     * Class III cell edges cross the edges of the icosa faces.
     * Add an intersection vertex where that happens, except when the
     * intersection lands exactly on a cell vertex (in which case each
     * adjacent cell edge lies on a single face).
     */
    if is_class_iii(res) && vert > start && adjusted.face != last_fijk.face && last_overage != Overage::FaceEdge {
      let last_v = (v + 5) % NUM_HEX_VERTS;
      let orig2d0 = verts[last_v].coord.to_hex2d();
      let orig2d1 = verts[v].coord.to_hex2d();

      let edge_verts = icosa_edge_verts(adj_res);
      let face2 = if last_fijk.face == center.face {
        adjusted.face
      } else {
        last_fijk.face
      };
      let (edge0, edge1) = match ADJACENT_FACE_DIR[center.face as usize][face2 as usize] {
        d if d == IJ as i32 => (&edge_verts[0], &edge_verts[1]),
        d if d == JK as i32 => (&edge_verts[1], &edge_verts[2]),
        _ => (&edge_verts[2], &edge_verts[0]),
      };

      let inter = line_intersection(&orig2d0, &orig2d1, edge0, edge1);
      let at_vertex = orig2d0.almost_eq(&inter) || orig2d1.almost_eq(&inter);
      if !at_vertex && boundary.num_verts < MAX_BOUNDARY_VERTS {
        boundary.verts[boundary.num_verts] = hex2d_to_geo(&inter, center.face, adj_res, true);
        boundary.num_verts += 1;
      }
    }

    if vert < start + length && boundary.num_verts < MAX_BOUNDARY_VERTS {
      boundary.verts[boundary.num_verts] = hex2d_to_geo(&adjusted.coord.to_hex2d(), adjusted.face, adj_res, true);
      boundary.num_verts += 1;
    }

    last_fijk = adjusted;
    last_overage = overage;
  }

  boundary
}

/// Generates the boundary of a pentagonal cell; every Class III pentagon
/// edge crosses an icosahedron edge.
pub(crate) fn pent_boundary(fijk: &FaceIjk, res: i32, start: usize, length: usize) -> GeoBoundary {
  let mut center = *fijk;
  let mut adj_res = res;
  let verts = pent_to_verts(&mut center, &mut adj_res);

  let additional = usize::from(length == NUM_PENT_VERTS);

  let mut boundary = GeoBoundary::default();
  let mut last_fijk = FaceIjk::default();

  for vert in start..(start + length + additional) {
    let v = vert % NUM_PENT_VERTS;

    let mut adjusted = verts[v];
    adjust_pent_vert_overage(&mut adjusted, adj_res);

    if is_class_iii(res) && vert > start {
      // project the current vertex onto the previous vertex's face and
      // intersect the edge with the face boundary there
      let orig2d0 = last_fijk.coord.to_hex2d();

      let to_last_dir = ADJACENT_FACE_DIR[adjusted.face as usize][last_fijk.face as usize];
      let orient = &FACE_NEIGHBORS[adjusted.face as usize][to_last_dir as usize];

      let mut tmp = adjusted;
      tmp.face = orient.face;
      let mut coord = tmp.coord;
      for _ in 0..orient.ccw_rot60 {
        coord = coord.rotate60_ccw();
      }
      tmp.coord = coord
        .add(orient.translate.scale(UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3))
        .normalize();

      let orig2d1 = tmp.coord.to_hex2d();

      let edge_verts = icosa_edge_verts(adj_res);
      let (edge0, edge1) = match ADJACENT_FACE_DIR[tmp.face as usize][adjusted.face as usize] {
        d if d == IJ as i32 => (&edge_verts[0], &edge_verts[1]),
        d if d == JK as i32 => (&edge_verts[1], &edge_verts[2]),
        _ => (&edge_verts[2], &edge_verts[0]),
      };

      let inter = line_intersection(&orig2d0, &orig2d1, edge0, edge1);
      if boundary.num_verts < MAX_BOUNDARY_VERTS {
        boundary.verts[boundary.num_verts] = hex2d_to_geo(&inter, tmp.face, adj_res, true);
        boundary.num_verts += 1;
      }
    }

    if vert < start + NUM_PENT_VERTS && boundary.num_verts < MAX_BOUNDARY_VERTS {
      boundary.verts[boundary.num_verts] = hex2d_to_geo(&adjusted.coord.to_hex2d(), adjusted.face, adj_res, true);
      boundary.num_verts += 1;
    }

    last_fijk = adjusted;
  }

  boundary
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::EPSILON_RAD;
  use crate::math::spherical::geo_almost_eq_threshold;

  #[test]
  fn adjacent_face_dir_matches_neighbor_table() {
    for from in 0..NUM_ICOSA_FACES as usize {
      assert_eq!(ADJACENT_FACE_DIR[from][from], 0);
      for q in IJ..=JK {
        let to = FACE_NEIGHBORS[from][q].face as usize;
        assert_eq!(
          ADJACENT_FACE_DIR[from][to], q as i32,
          "face {from} quadrant {q} leads to face {to}"
        );
      }
    }
  }

  #[test]
  fn face_centers_project_to_origin() {
    for f in 0..NUM_ICOSA_FACES as usize {
      let (face, v) = geo_to_hex2d(&FACE_CENTER_GEO[f], 0);
      assert_eq!(face, f as i32);
      assert!(v.x.abs() < EPSILON && v.y.abs() < EPSILON);

      for res in 0..=MAX_RES {
        let fijk = geo_to_face_ijk(&FACE_CENTER_GEO[f], res);
        assert_eq!(fijk.face, f as i32);
        assert_eq!(fijk.coord, CoordIjk::default());
      }
    }
  }

  #[test]
  fn hex2d_geo_roundtrip() {
    for f in 0..NUM_ICOSA_FACES {
      for &res in &[0, 1, 5] {
        let v = if res == 0 {
          Vec2d::default()
        } else {
          Vec2d::new(0.1 * f64::from(f + 1), -0.05 * f64::from(f + 1))
        };
        let geo = hex2d_to_geo(&v, f, res, false);
        let (face_rt, v_rt) = geo_to_hex2d(&geo, res);
        assert_eq!(face_rt, f, "roundtrip face at res {res}");
        let tol = match res {
          0 => EPSILON,
          1 => EPSILON * 1e3,
          _ => EPSILON * 1e6,
        };
        assert!((v.x - v_rt.x).abs() < tol && (v.y - v_rt.y).abs() < tol, "roundtrip 2D at res {res}");
      }
    }
  }

  #[test]
  fn face_ijk_geo_roundtrip() {
    for face in 0..NUM_ICOSA_FACES {
      for res in 0..=3 {
        let fijk = FaceIjk {
          face,
          coord: CoordIjk::new(res + 1, res / 2, 0).normalize(),
        };
        let geo = face_ijk_to_geo(&fijk, res);
        let rt = geo_to_face_ijk(&geo, res);
        assert_eq!(rt.face, fijk.face, "face at res {res}");
        assert_eq!(rt.coord, fijk.coord, "coord at res {res}");
        let geo_rt = face_ijk_to_geo(&rt, res);
        assert!(geo_almost_eq_threshold(&geo, &geo_rt, EPSILON_RAD));
      }
    }
  }

  #[test]
  fn overage_noop_inside_face() {
    let mut fijk = FaceIjk {
      face: 1,
      coord: CoordIjk::default(),
    };
    assert_eq!(adjust_overage_class_ii(&mut fijk, 2, false, false), Overage::None);
    assert_eq!(fijk.face, 1);

    // the substrate edge is detected without moving the coordinate
    let mut on_edge = FaceIjk {
      face: 1,
      coord: CoordIjk::new(42, 0, 0),
    };
    assert_eq!(adjust_overage_class_ii(&mut on_edge, 2, false, true), Overage::FaceEdge);
    assert_eq!(on_edge.coord, CoordIjk::new(42, 0, 0));
  }

  #[test]
  fn overage_moves_to_new_face() {
    let mut fijk = FaceIjk {
      face: 0,
      coord: CoordIjk::new(3, 0, 0),
    };
    assert_eq!(adjust_overage_class_ii(&mut fijk, 0, false, false), Overage::NewFace);
    assert_eq!(fijk.face, 4);
    assert_eq!(fijk.coord, CoordIjk::new(3, 1, 0));
  }

  #[test]
  fn overage_pentagon_leading_4() {
    let mut fijk = FaceIjk {
      face: 0,
      coord: CoordIjk::new(1, 0, 2),
    };
    assert_eq!(adjust_overage_class_ii(&mut fijk, 0, true, false), Overage::NewFace);
    assert_eq!(fijk.face, 1);
    assert_eq!(fijk.coord, CoordIjk::new(3, 3, 0));
  }

  #[test]
  fn pent_vert_overage_settles() {
    let mut fijk = FaceIjk {
      face: 0,
      coord: CoordIjk::new(43, 0, 0),
    };
    assert_ne!(adjust_pent_vert_overage(&mut fijk, 2), Overage::NewFace);
  }

  #[test]
  fn hexagon_boundary_counts() {
    let fijk = FaceIjk {
      face: 1,
      coord: CoordIjk::new(1, 1, 0),
    };
    let boundary = cell_boundary(&fijk, 2, 0, NUM_HEX_VERTS);
    assert_eq!(boundary.num_verts, NUM_HEX_VERTS, "Class II hexagon has no distortion");
  }

  #[test]
  fn pentagon_boundary_counts() {
    let class_iii = FaceIjk {
      face: 0,
      coord: CoordIjk::new(2, 0, 0),
    };
    let b = pent_boundary(&class_iii, 1, 0, NUM_PENT_VERTS);
    assert_eq!(b.num_verts, 10, "every Class III pentagon edge crosses a face edge");

    let class_ii = FaceIjk {
      face: 0,
      coord: CoordIjk::new(14, 0, 0),
    };
    let b = pent_boundary(&class_ii, 2, 0, NUM_PENT_VERTS);
    assert_eq!(b.num_verts, NUM_PENT_VERTS, "Class II pentagon vertices sit on face edges");
  }
}
