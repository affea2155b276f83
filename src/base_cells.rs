//! The 122 resolution-0 base cells and their adjacency data.
//!
//! Base-cell adjacency is a fixed graph; it is expressed here as immutable
//! lookup tables indexed by `(base cell, direction)` and `(face, ijk)`.

use crate::constants::{NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::types::{CellIndex, CoordIjk, Digit, FaceIjk};

/// Sentinel for "no base cell" entries in the neighbor table.
pub(crate) const INVALID_BASE_CELL: i32 = 127;
/// Sentinel for "no rotation" lookups.
pub(crate) const INVALID_ROTATIONS: i32 = -1;
/// Maximum per-axis IJK component of a base-cell home coordinate.
pub(crate) const MAX_FACE_COORD: i32 = 2;

/// Static description of one base cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCellData {
  /// Home face and normalized IJK coordinates on that face.
  pub(crate) home: FaceIjk,
  /// Whether this base cell is one of the twelve pentagons.
  pub(crate) is_pentagon: bool,
  /// For pentagons, the two clockwise offset faces (-1 when absent).
  pub(crate) cw_offset_faces: [i32; 2],
}

const fn hex(face: i32, i: i32, j: i32, k: i32) -> BaseCellData {
  BaseCellData {
    home: FaceIjk {
      face,
      coord: CoordIjk { i, j, k },
    },
    is_pentagon: false,
    cw_offset_faces: [-1, -1],
  }
}

const fn pent(face: i32, i: i32, j: i32, k: i32, cw0: i32, cw1: i32) -> BaseCellData {
  BaseCellData {
    home: FaceIjk {
      face,
      coord: CoordIjk { i, j, k },
    },
    is_pentagon: true,
    cw_offset_faces: [cw0, cw1],
  }
}

/// Per base cell: home face/IJK, pentagon flag and clockwise offset faces.
#[rustfmt::skip]
pub(crate) static BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
  hex(1, 1, 0, 0),            // 0
  hex(2, 1, 1, 0),            // 1
  hex(1, 0, 0, 0),            // 2
  hex(2, 1, 0, 0),            // 3
  pent(0, 2, 0, 0, -1, -1),   // 4
  hex(1, 1, 1, 0),            // 5
  hex(1, 0, 0, 1),            // 6
  hex(2, 0, 0, 0),            // 7
  hex(0, 1, 0, 0),            // 8
  hex(2, 0, 1, 0),            // 9
  hex(1, 0, 1, 0),            // 10
  hex(1, 0, 1, 1),            // 11
  hex(3, 1, 0, 0),            // 12
  hex(3, 1, 1, 0),            // 13
  pent(11, 2, 0, 0, 2, 6),    // 14
  hex(4, 1, 0, 0),            // 15
  hex(0, 0, 0, 0),            // 16
  hex(6, 0, 1, 0),            // 17
  hex(0, 0, 0, 1),            // 18
  hex(2, 0, 1, 1),            // 19
  hex(7, 0, 0, 1),            // 20
  hex(2, 0, 0, 1),            // 21
  hex(0, 1, 1, 0),            // 22
  hex(6, 0, 0, 1),            // 23
  pent(10, 2, 0, 0, 1, 5),    // 24
  hex(6, 0, 0, 0),            // 25
  hex(3, 0, 0, 0),            // 26
  hex(11, 1, 0, 0),           // 27
  hex(4, 1, 1, 0),            // 28
  hex(3, 0, 1, 0),            // 29
  hex(0, 0, 1, 1),            // 30
  hex(4, 0, 0, 0),            // 31
  hex(5, 0, 1, 0),            // 32
  hex(0, 0, 1, 0),            // 33
  hex(7, 0, 1, 0),            // 34
  hex(11, 1, 1, 0),           // 35
  hex(7, 0, 0, 0),            // 36
  hex(10, 1, 0, 0),           // 37
  pent(12, 2, 0, 0, 3, 7),    // 38
  hex(6, 1, 0, 1),            // 39
  hex(7, 1, 0, 1),            // 40
  hex(4, 0, 0, 1),            // 41
  hex(3, 0, 0, 1),            // 42
  hex(3, 0, 1, 1),            // 43
  hex(4, 0, 1, 0),            // 44
  hex(6, 1, 0, 0),            // 45
  hex(11, 0, 0, 0),           // 46
  hex(8, 0, 0, 1),            // 47
  hex(5, 0, 0, 1),            // 48
  pent(14, 2, 0, 0, 0, 9),    // 49
  hex(5, 0, 0, 0),            // 50
  hex(12, 1, 0, 0),           // 51
  hex(10, 1, 1, 0),           // 52
  hex(4, 0, 1, 1),            // 53
  hex(12, 1, 1, 0),           // 54
  hex(7, 1, 0, 0),            // 55
  hex(11, 0, 1, 0),           // 56
  hex(10, 0, 0, 0),           // 57
  pent(13, 2, 0, 0, 4, 8),    // 58
  hex(10, 0, 0, 1),           // 59
  hex(11, 0, 0, 1),           // 60
  hex(9, 0, 1, 0),            // 61
  hex(8, 0, 1, 0),            // 62
  pent(6, 2, 0, 0, 11, 15),   // 63
  hex(8, 0, 0, 0),            // 64
  hex(9, 0, 0, 1),            // 65
  hex(14, 1, 0, 0),           // 66
  hex(5, 1, 0, 1),            // 67
  hex(16, 0, 1, 1),           // 68
  hex(8, 1, 0, 1),            // 69
  hex(5, 1, 0, 0),            // 70
  hex(12, 0, 0, 0),           // 71
  pent(7, 2, 0, 0, 12, 16),   // 72
  hex(12, 0, 1, 0),           // 73
  hex(10, 0, 1, 0),           // 74
  hex(9, 0, 0, 0),            // 75
  hex(13, 1, 0, 0),           // 76
  hex(16, 0, 0, 1),           // 77
  hex(15, 0, 1, 1),           // 78
  hex(15, 0, 1, 0),           // 79
  hex(16, 0, 1, 0),           // 80
  hex(14, 1, 1, 0),           // 81
  hex(13, 1, 1, 0),           // 82
  pent(5, 2, 0, 0, 10, 19),   // 83
  hex(8, 1, 0, 0),            // 84
  hex(14, 0, 0, 0),           // 85
  hex(9, 1, 0, 1),            // 86
  hex(14, 0, 0, 1),           // 87
  hex(17, 0, 0, 1),           // 88
  hex(12, 0, 0, 1),           // 89
  hex(16, 0, 0, 0),           // 90
  hex(17, 0, 1, 1),           // 91
  hex(15, 0, 0, 1),           // 92
  hex(16, 1, 0, 1),           // 93
  hex(9, 1, 0, 0),            // 94
  hex(15, 0, 0, 0),           // 95
  hex(13, 0, 0, 0),           // 96
  pent(8, 2, 0, 0, 13, 17),   // 97
  hex(13, 0, 1, 0),           // 98
  hex(17, 1, 0, 1),           // 99
  hex(19, 0, 1, 0),           // 100
  hex(14, 0, 1, 0),           // 101
  hex(19, 0, 1, 1),           // 102
  hex(17, 0, 1, 0),           // 103
  hex(13, 0, 0, 1),           // 104
  hex(17, 0, 0, 0),           // 105
  hex(16, 1, 0, 0),           // 106
  pent(9, 2, 0, 0, 14, 18),   // 107
  hex(15, 1, 0, 1),           // 108
  hex(15, 1, 0, 0),           // 109
  hex(18, 0, 1, 1),           // 110
  hex(18, 0, 0, 1),           // 111
  hex(19, 0, 0, 1),           // 112
  hex(17, 1, 0, 0),           // 113
  hex(19, 0, 0, 0),           // 114
  hex(18, 0, 1, 0),           // 115
  hex(18, 1, 0, 1),           // 116
  pent(19, 2, 0, 0, -1, -1),  // 117
  hex(19, 1, 0, 0),           // 118
  hex(18, 0, 0, 0),           // 119
  hex(19, 1, 0, 1),           // 120
  hex(18, 1, 0, 0),           // 121
];

/// Neighboring base cell in each direction digit. `INVALID_BASE_CELL` marks
/// the deleted k axis of pentagons.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBORS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 1, 5, 2, 4, 3, 8],                            // 0
  [1, 7, 6, 9, 0, 3, 2],                            // 1
  [2, 6, 10, 11, 0, 1, 5],                          // 2
  [3, 13, 1, 7, 4, 12, 0],                          // 3
  [4, INVALID_BASE_CELL, 15, 8, 3, 0, 12],          // 4 (pentagon)
  [5, 2, 18, 10, 8, 0, 16],                         // 5
  [6, 14, 11, 17, 1, 9, 2],                         // 6
  [7, 21, 9, 19, 3, 13, 1],                         // 7
  [8, 5, 22, 16, 4, 0, 15],                         // 8
  [9, 19, 14, 20, 1, 7, 6],                         // 9
  [10, 11, 24, 23, 5, 2, 18],                       // 10
  [11, 17, 23, 25, 2, 6, 10],                       // 11
  [12, 28, 13, 26, 4, 15, 3],                       // 12
  [13, 26, 21, 29, 3, 12, 7],                       // 13
  [14, INVALID_BASE_CELL, 17, 27, 9, 20, 6],        // 14 (pentagon)
  [15, 22, 28, 31, 4, 8, 12],                       // 15
  [16, 18, 33, 30, 8, 5, 22],                       // 16
  [17, 11, 14, 6, 35, 25, 27],                      // 17
  [18, 24, 30, 32, 5, 10, 16],                      // 18
  [19, 34, 20, 36, 7, 21, 9],                       // 19
  [20, 14, 19, 9, 40, 27, 36],                      // 20
  [21, 38, 19, 34, 13, 29, 7],                      // 21
  [22, 16, 41, 33, 15, 8, 31],                      // 22
  [23, 24, 11, 10, 39, 37, 25],                     // 23
  [24, INVALID_BASE_CELL, 32, 37, 10, 23, 18],      // 24 (pentagon)
  [25, 23, 17, 11, 45, 39, 35],                     // 25
  [26, 42, 29, 43, 12, 28, 13],                     // 26
  [27, 40, 35, 46, 14, 20, 17],                     // 27
  [28, 31, 42, 44, 12, 15, 26],                     // 28
  [29, 43, 38, 47, 13, 26, 21],                     // 29
  [30, 32, 48, 50, 16, 18, 33],                     // 30
  [31, 41, 44, 53, 15, 22, 28],                     // 31
  [32, 30, 24, 18, 52, 50, 37],                     // 32
  [33, 30, 49, 48, 22, 16, 41],                     // 33
  [34, 19, 38, 21, 54, 36, 51],                     // 34
  [35, 46, 45, 56, 17, 27, 25],                     // 35
  [36, 20, 34, 19, 55, 40, 54],                     // 36
  [37, 39, 52, 57, 24, 23, 32],                     // 37
  [38, INVALID_BASE_CELL, 34, 51, 29, 47, 21],      // 38 (pentagon)
  [39, 37, 25, 23, 59, 57, 45],                     // 39
  [40, 27, 36, 20, 60, 46, 55],                     // 40
  [41, 49, 53, 61, 22, 33, 31],                     // 41
  [42, 58, 43, 62, 28, 44, 26],                     // 42
  [43, 62, 47, 64, 26, 42, 29],                     // 43
  [44, 53, 58, 65, 28, 31, 42],                     // 44
  [45, 39, 35, 25, 63, 59, 56],                     // 45
  [46, 60, 56, 68, 27, 40, 35],                     // 46
  [47, 38, 43, 29, 69, 51, 64],                     // 47
  [48, 49, 30, 33, 67, 66, 50],                     // 48
  [49, INVALID_BASE_CELL, 61, 66, 33, 48, 41],      // 49 (pentagon)
  [50, 48, 32, 30, 70, 67, 52],                     // 50
  [51, 69, 54, 71, 38, 47, 34],                     // 51
  [52, 57, 70, 74, 32, 37, 50],                     // 52
  [53, 61, 65, 75, 31, 41, 44],                     // 53
  [54, 71, 55, 73, 34, 51, 36],                     // 54
  [55, 40, 54, 36, 72, 60, 73],                     // 55
  [56, 68, 63, 77, 35, 46, 45],                     // 56
  [57, 59, 74, 78, 37, 39, 52],                     // 57
  [58, INVALID_BASE_CELL, 62, 76, 44, 65, 42],      // 58 (pentagon)
  [59, 63, 78, 79, 39, 45, 57],                     // 59
  [60, 72, 68, 80, 40, 55, 46],                     // 60
  [61, 53, 49, 41, 81, 75, 66],                     // 61
  [62, 43, 58, 42, 82, 64, 76],                     // 62
  [63, INVALID_BASE_CELL, 56, 45, 79, 59, 77],      // 63 (pentagon)
  [64, 47, 62, 43, 84, 69, 82],                     // 64
  [65, 58, 53, 44, 86, 76, 75],                     // 65
  [66, 67, 81, 85, 49, 48, 61],                     // 66
  [67, 66, 50, 48, 87, 85, 70],                     // 67
  [68, 56, 60, 46, 90, 77, 80],                     // 68
  [69, 51, 64, 47, 89, 71, 84],                     // 69
  [70, 67, 52, 50, 83, 87, 74],                     // 70
  [71, 89, 73, 91, 51, 69, 54],                     // 71
  [72, INVALID_BASE_CELL, 73, 55, 80, 60, 88],      // 72 (pentagon)
  [73, 91, 72, 88, 54, 71, 55],                     // 73
  [74, 78, 83, 92, 52, 57, 70],                     // 74
  [75, 65, 61, 53, 94, 86, 81],                     // 75
  [76, 86, 82, 96, 58, 65, 62],                     // 76
  [77, 63, 68, 56, 93, 79, 90],                     // 77
  [78, 74, 59, 57, 95, 92, 79],                     // 78
  [79, 78, 63, 59, 93, 95, 77],                     // 79
  [80, 68, 72, 60, 99, 90, 88],                     // 80
  [81, 85, 94, 101, 61, 66, 75],                    // 81
  [82, 96, 84, 98, 62, 76, 64],                     // 82
  [83, INVALID_BASE_CELL, 74, 70, 100, 87, 92],     // 83 (pentagon)
  [84, 69, 82, 64, 97, 89, 98],                     // 84
  [85, 87, 101, 102, 66, 67, 81],                   // 85
  [86, 76, 75, 65, 104, 96, 94],                    // 86
  [87, 83, 102, 100, 67, 70, 85],                   // 87
  [88, 72, 91, 73, 99, 80, 105],                    // 88
  [89, 97, 91, 103, 69, 84, 71],                    // 89
  [90, 77, 80, 68, 106, 93, 99],                    // 90
  [91, 73, 89, 71, 105, 88, 103],                   // 91
  [92, 83, 78, 74, 108, 100, 95],                   // 92
  [93, 79, 90, 77, 109, 95, 106],                   // 93
  [94, 86, 81, 75, 107, 104, 101],                  // 94
  [95, 92, 79, 78, 109, 108, 93],                   // 95
  [96, 104, 98, 110, 76, 86, 82],                   // 96
  [97, INVALID_BASE_CELL, 98, 84, 103, 89, 111],    // 97 (pentagon)
  [98, 110, 97, 111, 82, 96, 84],                   // 98
  [99, 80, 105, 88, 106, 90, 113],                  // 99
  [100, 102, 83, 87, 108, 114, 92],                 // 100
  [101, 102, 107, 112, 81, 85, 94],                 // 101
  [102, 101, 87, 85, 114, 112, 100],                // 102
  [103, 91, 97, 89, 116, 105, 111],                 // 103
  [104, 107, 110, 115, 86, 94, 96],                 // 104
  [105, 88, 103, 91, 113, 99, 116],                 // 105
  [106, 93, 99, 90, 117, 109, 113],                 // 106
  [107, INVALID_BASE_CELL, 101, 94, 115, 104, 112], // 107 (pentagon)
  [108, 100, 95, 92, 118, 114, 109],                // 108
  [109, 108, 93, 95, 117, 118, 106],                // 109
  [110, 98, 104, 96, 119, 111, 115],                // 110
  [111, 97, 110, 98, 116, 103, 119],                // 111
  [112, 107, 102, 101, 120, 115, 114],              // 112
  [113, 99, 116, 105, 117, 106, 121],               // 113
  [114, 112, 100, 102, 118, 120, 108],              // 114
  [115, 110, 107, 104, 120, 119, 112],              // 115
  [116, 103, 119, 111, 113, 105, 121],              // 116
  [117, INVALID_BASE_CELL, 109, 118, 113, 121, 106],// 117 (pentagon)
  [118, 120, 108, 114, 117, 121, 109],              // 118
  [119, 111, 115, 110, 121, 116, 120],              // 119
  [120, 115, 114, 112, 121, 119, 118],              // 120
  [121, 116, 120, 119, 117, 113, 118],              // 121
];

/// 60-degree ccw rotations into the neighboring base cell's coordinate
/// system, per direction digit.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBOR_60CCW_ROTS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 5, 0, 0, 1, 5, 1],  // 0
  [0, 0, 1, 0, 1, 0, 1],  // 1
  [0, 0, 0, 0, 0, 5, 0],  // 2
  [0, 5, 0, 0, 2, 5, 1],  // 3
  [0, -1, 1, 0, 3, 4, 2], // 4 (pentagon)
  [0, 0, 1, 0, 1, 0, 1],  // 5
  [0, 0, 0, 3, 5, 5, 0],  // 6
  [0, 0, 0, 0, 0, 5, 0],  // 7
  [0, 5, 0, 0, 0, 5, 1],  // 8
  [0, 0, 1, 3, 0, 0, 1],  // 9
  [0, 0, 1, 3, 0, 0, 1],  // 10
  [0, 3, 3, 3, 0, 0, 0],  // 11
  [0, 5, 0, 0, 3, 5, 1],  // 12
  [0, 0, 1, 0, 1, 0, 1],  // 13
  [0, -1, 3, 0, 5, 2, 0], // 14 (pentagon)
  [0, 5, 0, 0, 4, 5, 1],  // 15
  [0, 0, 0, 0, 0, 5, 0],  // 16
  [0, 3, 3, 3, 3, 0, 3],  // 17
  [0, 0, 0, 3, 5, 5, 0],  // 18
  [0, 3, 3, 3, 0, 0, 0],  // 19
  [0, 3, 3, 3, 0, 3, 0],  // 20
  [0, 0, 0, 3, 5, 5, 0],  // 21
  [0, 0, 1, 0, 1, 0, 1],  // 22
  [0, 3, 3, 3, 0, 3, 0],  // 23
  [0, -1, 3, 0, 5, 2, 0], // 24 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],  // 25
  [0, 0, 0, 0, 0, 5, 0],  // 26
  [0, 3, 0, 0, 0, 3, 3],  // 27
  [0, 0, 1, 0, 1, 0, 1],  // 28
  [0, 0, 1, 3, 0, 0, 1],  // 29
  [0, 3, 3, 3, 0, 0, 0],  // 30
  [0, 0, 0, 0, 0, 5, 0],  // 31
  [0, 3, 3, 3, 3, 0, 3],  // 32
  [0, 0, 1, 3, 0, 0, 1],  // 33
  [0, 3, 3, 3, 3, 0, 3],  // 34
  [0, 0, 3, 0, 3, 0, 3],  // 35
  [0, 0, 0, 3, 0, 0, 3],  // 36
  [0, 3, 0, 0, 0, 3, 3],  // 37
  [0, -1, 3, 0, 5, 2, 0], // 38 (pentagon)
  [0, 3, 0, 0, 3, 3, 0],  // 39
  [0, 3, 0, 0, 3, 3, 0],  // 40
  [0, 0, 0, 3, 5, 5, 0],  // 41
  [0, 0, 0, 3, 5, 5, 0],  // 42
  [0, 3, 3, 3, 0, 0, 0],  // 43
  [0, 0, 1, 3, 0, 0, 1],  // 44
  [0, 0, 3, 0, 0, 3, 3],  // 45
  [0, 0, 0, 3, 0, 3, 0],  // 46
  [0, 3, 3, 3, 0, 3, 0],  // 47
  [0, 3, 3, 3, 0, 3, 0],  // 48
  [0, -1, 3, 0, 5, 2, 0], // 49 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],  // 50
  [0, 3, 0, 0, 0, 3, 3],  // 51
  [0, 0, 3, 0, 3, 0, 3],  // 52
  [0, 3, 3, 3, 0, 0, 0],  // 53
  [0, 0, 3, 0, 3, 0, 3],  // 54
  [0, 0, 3, 0, 0, 3, 3],  // 55
  [0, 3, 3, 3, 0, 0, 3],  // 56
  [0, 0, 0, 3, 0, 3, 0],  // 57
  [0, -1, 3, 0, 5, 2, 0], // 58 (pentagon)
  [0, 3, 3, 3, 3, 3, 0],  // 59
  [0, 3, 3, 3, 3, 3, 0],  // 60
  [0, 3, 3, 3, 3, 0, 3],  // 61
  [0, 3, 3, 3, 3, 0, 3],  // 62
  [0, -1, 3, 0, 5, 2, 0], // 63 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],  // 64
  [0, 3, 3, 3, 0, 3, 0],  // 65
  [0, 3, 0, 0, 0, 3, 3],  // 66
  [0, 3, 0, 0, 3, 3, 0],  // 67
  [0, 3, 3, 3, 0, 0, 0],  // 68
  [0, 3, 0, 0, 3, 3, 0],  // 69
  [0, 0, 3, 0, 0, 3, 3],  // 70
  [0, 0, 0, 3, 0, 3, 0],  // 71
  [0, -1, 3, 0, 5, 2, 0], // 72 (pentagon)
  [0, 3, 3, 3, 0, 0, 3],  // 73
  [0, 3, 3, 3, 0, 0, 3],  // 74
  [0, 0, 0, 3, 0, 0, 3],  // 75
  [0, 3, 0, 0, 0, 3, 3],  // 76
  [0, 0, 0, 3, 0, 5, 0],  // 77
  [0, 3, 3, 3, 0, 0, 0],  // 78
  [0, 0, 1, 3, 1, 0, 1],  // 79
  [0, 0, 1, 3, 1, 0, 1],  // 80
  [0, 0, 3, 0, 3, 0, 3],  // 81
  [0, 0, 3, 0, 3, 0, 3],  // 82
  [0, -1, 3, 0, 5, 2, 0], // 83 (pentagon)
  [0, 0, 3, 0, 0, 3, 3],  // 84
  [0, 0, 0, 3, 0, 3, 0],  // 85
  [0, 3, 0, 0, 3, 3, 0],  // 86
  [0, 3, 3, 3, 3, 3, 0],  // 87
  [0, 0, 0, 3, 0, 5, 0],  // 88
  [0, 3, 3, 3, 3, 3, 0],  // 89
  [0, 0, 0, 0, 0, 0, 1],  // 90
  [0, 3, 3, 3, 0, 0, 0],  // 91
  [0, 0, 0, 3, 0, 5, 0],  // 92
  [0, 5, 0, 0, 5, 5, 0],  // 93
  [0, 0, 3, 0, 0, 3, 3],  // 94
  [0, 0, 0, 0, 0, 0, 1],  // 95
  [0, 0, 0, 3, 0, 3, 0],  // 96
  [0, -1, 3, 0, 5, 2, 0], // 97 (pentagon)
  [0, 3, 3, 3, 0, 0, 3],  // 98
  [0, 5, 0, 0, 5, 5, 0],  // 99
  [0, 0, 1, 3, 1, 0, 1],  // 100
  [0, 3, 3, 3, 0, 0, 3],  // 101
  [0, 3, 3, 3, 0, 0, 0],  // 102
  [0, 0, 1, 3, 1, 0, 1],  // 103
  [0, 3, 3, 3, 3, 3, 0],  // 104
  [0, 0, 0, 0, 0, 0, 1],  // 105
  [0, 0, 1, 0, 3, 5, 1],  // 106
  [0, -1, 3, 0, 5, 2, 0], // 107 (pentagon)
  [0, 5, 0, 0, 5, 5, 0],  // 108
  [0, 0, 1, 0, 4, 5, 1],  // 109
  [0, 3, 3, 3, 0, 0, 0],  // 110
  [0, 0, 0, 3, 0, 5, 0],  // 111
  [0, 0, 0, 3, 0, 5, 0],  // 112
  [0, 0, 1, 0, 2, 5, 1],  // 113
  [0, 0, 0, 0, 0, 0, 1],  // 114
  [0, 0, 1, 3, 1, 0, 1],  // 115
  [0, 5, 0, 0, 5, 5, 0],  // 116
  [0, -1, 1, 0, 3, 4, 2], // 117 (pentagon)
  [0, 0, 1, 0, 0, 5, 1],  // 118
  [0, 0, 0, 0, 0, 0, 1],  // 119
  [0, 5, 0, 0, 5, 5, 0],  // 120
  [0, 0, 1, 0, 1, 5, 1],  // 121
];

/// A base-cell lookup entry: the cell at a face coordinate and the number
/// of 60-degree ccw rotations into its orientation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCellRotation {
  pub(crate) base_cell: i32,
  pub(crate) ccw_rot60: i32,
}

const fn bc(base_cell: i32, ccw_rot60: i32) -> BaseCellRotation {
  BaseCellRotation { base_cell, ccw_rot60 }
}

/// Base cell at each resolution-0 face IJK coordinate, indexed by
/// `[face][i][j][k]` with each component in 0..=2.
#[rustfmt::skip]
pub(crate) static FACE_IJK_BASE_CELLS: [[[[BaseCellRotation; 3]; 3]; 3]; NUM_ICOSA_FACES as usize] = [
  // face 0
  [[[bc(16, 0), bc(18, 0), bc(24, 0)], [bc(33, 0), bc(30, 0), bc(32, 3)], [bc(49, 1), bc(48, 3), bc(50, 3)]],
   [[bc(8, 0), bc(5, 5), bc(10, 5)], [bc(22, 0), bc(16, 0), bc(18, 0)], [bc(41, 1), bc(33, 0), bc(30, 0)]],
   [[bc(4, 0), bc(0, 5), bc(2, 5)], [bc(15, 1), bc(8, 0), bc(5, 5)], [bc(31, 1), bc(22, 0), bc(16, 0)]]],
  // face 1
  [[[bc(2, 0), bc(6, 0), bc(14, 0)], [bc(10, 0), bc(11, 0), bc(17, 3)], [bc(24, 1), bc(23, 3), bc(25, 3)]],
   [[bc(0, 0), bc(1, 5), bc(9, 5)], [bc(5, 0), bc(2, 0), bc(6, 0)], [bc(18, 1), bc(10, 0), bc(11, 0)]],
   [[bc(4, 1), bc(3, 5), bc(7, 5)], [bc(8, 1), bc(0, 0), bc(1, 5)], [bc(16, 1), bc(5, 0), bc(2, 0)]]],
  // face 2
  [[[bc(7, 0), bc(21, 0), bc(38, 0)], [bc(9, 0), bc(19, 0), bc(34, 3)], [bc(14, 1), bc(20, 3), bc(36, 3)]],
   [[bc(3, 0), bc(13, 5), bc(29, 5)], [bc(1, 0), bc(7, 0), bc(21, 0)], [bc(6, 1), bc(9, 0), bc(19, 0)]],
   [[bc(4, 2), bc(12, 5), bc(26, 5)], [bc(0, 1), bc(3, 0), bc(13, 5)], [bc(2, 1), bc(1, 0), bc(7, 0)]]],
  // face 3
  [[[bc(26, 0), bc(42, 0), bc(58, 0)], [bc(29, 0), bc(43, 0), bc(62, 3)], [bc(38, 1), bc(47, 3), bc(64, 3)]],
   [[bc(12, 0), bc(28, 5), bc(44, 5)], [bc(13, 0), bc(26, 0), bc(42, 0)], [bc(21, 1), bc(29, 0), bc(43, 0)]],
   [[bc(4, 3), bc(15, 5), bc(31, 5)], [bc(3, 1), bc(12, 0), bc(28, 5)], [bc(7, 1), bc(13, 0), bc(26, 0)]]],
  // face 4
  [[[bc(31, 0), bc(41, 0), bc(49, 0)], [bc(44, 0), bc(53, 0), bc(61, 3)], [bc(58, 1), bc(65, 3), bc(75, 3)]],
   [[bc(15, 0), bc(22, 5), bc(33, 5)], [bc(28, 0), bc(31, 0), bc(41, 0)], [bc(42, 1), bc(44, 0), bc(53, 0)]],
   [[bc(4, 4), bc(8, 5), bc(16, 5)], [bc(12, 1), bc(15, 0), bc(22, 5)], [bc(26, 1), bc(28, 0), bc(31, 0)]]],
  // face 5
  [[[bc(50, 0), bc(48, 0), bc(49, 3)], [bc(32, 0), bc(30, 3), bc(33, 3)], [bc(24, 3), bc(18, 3), bc(16, 3)]],
   [[bc(70, 0), bc(67, 0), bc(66, 3)], [bc(52, 3), bc(50, 0), bc(48, 0)], [bc(37, 3), bc(32, 0), bc(30, 3)]],
   [[bc(83, 0), bc(87, 3), bc(85, 3)], [bc(74, 3), bc(70, 0), bc(67, 0)], [bc(57, 1), bc(52, 3), bc(50, 0)]]],
  // face 6
  [[[bc(25, 0), bc(23, 0), bc(24, 3)], [bc(17, 0), bc(11, 3), bc(10, 3)], [bc(14, 3), bc(6, 3), bc(2, 3)]],
   [[bc(45, 0), bc(39, 0), bc(37, 3)], [bc(35, 3), bc(25, 0), bc(23, 0)], [bc(27, 3), bc(17, 0), bc(11, 3)]],
   [[bc(63, 0), bc(59, 3), bc(57, 3)], [bc(56, 3), bc(45, 0), bc(39, 0)], [bc(46, 3), bc(35, 3), bc(25, 0)]]],
  // face 7
  [[[bc(36, 0), bc(20, 0), bc(14, 3)], [bc(34, 0), bc(19, 3), bc(9, 3)], [bc(38, 3), bc(21, 3), bc(7, 3)]],
   [[bc(55, 0), bc(40, 0), bc(27, 3)], [bc(54, 3), bc(36, 0), bc(20, 0)], [bc(51, 3), bc(34, 0), bc(19, 3)]],
   [[bc(72, 0), bc(60, 3), bc(46, 3)], [bc(73, 3), bc(55, 0), bc(40, 0)], [bc(71, 3), bc(54, 3), bc(36, 0)]]],
  // face 8
  [[[bc(64, 0), bc(47, 0), bc(38, 3)], [bc(62, 0), bc(43, 3), bc(29, 3)], [bc(58, 3), bc(42, 3), bc(26, 3)]],
   [[bc(84, 0), bc(69, 0), bc(51, 3)], [bc(82, 3), bc(64, 0), bc(47, 0)], [bc(76, 3), bc(62, 0), bc(43, 3)]],
   [[bc(97, 0), bc(89, 3), bc(71, 3)], [bc(98, 3), bc(84, 0), bc(69, 0)], [bc(96, 3), bc(82, 3), bc(64, 0)]]],
  // face 9
  [[[bc(75, 0), bc(65, 0), bc(58, 3)], [bc(61, 0), bc(53, 3), bc(44, 3)], [bc(49, 3), bc(41, 3), bc(31, 3)]],
   [[bc(94, 0), bc(86, 0), bc(76, 3)], [bc(81, 3), bc(75, 0), bc(65, 0)], [bc(66, 3), bc(61, 0), bc(53, 3)]],
   [[bc(107, 0), bc(104, 3), bc(96, 3)], [bc(101, 3), bc(94, 0), bc(86, 0)], [bc(85, 3), bc(81, 3), bc(75, 0)]]],
  // face 10
  [[[bc(57, 0), bc(59, 0), bc(63, 3)], [bc(74, 0), bc(78, 3), bc(79, 3)], [bc(83, 3), bc(92, 3), bc(95, 3)]],
   [[bc(37, 0), bc(39, 3), bc(45, 3)], [bc(52, 0), bc(57, 0), bc(59, 0)], [bc(70, 3), bc(74, 0), bc(78, 3)]],
   [[bc(24, 0), bc(23, 3), bc(25, 3)], [bc(32, 3), bc(37, 0), bc(39, 3)], [bc(50, 3), bc(52, 0), bc(57, 0)]]],
  // face 11
  [[[bc(46, 0), bc(60, 0), bc(72, 3)], [bc(56, 0), bc(68, 3), bc(80, 3)], [bc(63, 3), bc(77, 3), bc(90, 3)]],
   [[bc(27, 0), bc(40, 3), bc(55, 3)], [bc(35, 0), bc(46, 0), bc(60, 0)], [bc(45, 3), bc(56, 0), bc(68, 3)]],
   [[bc(14, 0), bc(20, 3), bc(36, 3)], [bc(17, 3), bc(27, 0), bc(40, 3)], [bc(25, 3), bc(35, 0), bc(46, 0)]]],
  // face 12
  [[[bc(71, 0), bc(89, 0), bc(97, 3)], [bc(73, 0), bc(91, 3), bc(103, 3)], [bc(72, 3), bc(88, 3), bc(105, 3)]],
   [[bc(51, 0), bc(69, 3), bc(84, 3)], [bc(54, 0), bc(71, 0), bc(89, 0)], [bc(55, 3), bc(73, 0), bc(91, 3)]],
   [[bc(38, 0), bc(47, 3), bc(64, 3)], [bc(34, 3), bc(51, 0), bc(69, 3)], [bc(36, 3), bc(54, 0), bc(71, 0)]]],
  // face 13
  [[[bc(96, 0), bc(104, 0), bc(107, 3)], [bc(98, 0), bc(110, 3), bc(115, 3)], [bc(97, 3), bc(111, 3), bc(119, 3)]],
   [[bc(76, 0), bc(86, 3), bc(94, 3)], [bc(82, 0), bc(96, 0), bc(104, 0)], [bc(84, 3), bc(98, 0), bc(110, 3)]],
   [[bc(58, 0), bc(65, 3), bc(75, 3)], [bc(62, 3), bc(76, 0), bc(86, 3)], [bc(64, 3), bc(82, 0), bc(96, 0)]]],
  // face 14
  [[[bc(85, 0), bc(87, 0), bc(83, 3)], [bc(101, 0), bc(102, 3), bc(100, 3)], [bc(107, 3), bc(112, 3), bc(114, 3)]],
   [[bc(66, 0), bc(67, 3), bc(70, 3)], [bc(81, 0), bc(85, 0), bc(87, 0)], [bc(94, 3), bc(101, 0), bc(102, 3)]],
   [[bc(49, 0), bc(48, 3), bc(50, 3)], [bc(61, 3), bc(66, 0), bc(67, 3)], [bc(75, 3), bc(81, 0), bc(85, 0)]]],
  // face 15
  [[[bc(95, 0), bc(92, 0), bc(83, 0)], [bc(79, 0), bc(78, 0), bc(74, 3)], [bc(63, 1), bc(59, 3), bc(57, 3)]],
   [[bc(109, 0), bc(108, 0), bc(100, 5)], [bc(93, 1), bc(95, 0), bc(92, 0)], [bc(77, 1), bc(79, 0), bc(78, 0)]],
   [[bc(117, 4), bc(118, 5), bc(114, 5)], [bc(106, 1), bc(109, 0), bc(108, 0)], [bc(90, 1), bc(93, 1), bc(95, 0)]]],
  // face 16
  [[[bc(90, 0), bc(77, 0), bc(63, 0)], [bc(80, 0), bc(68, 0), bc(56, 3)], [bc(72, 1), bc(60, 3), bc(46, 3)]],
   [[bc(106, 0), bc(93, 0), bc(79, 5)], [bc(99, 1), bc(90, 0), bc(77, 0)], [bc(88, 1), bc(80, 0), bc(68, 0)]],
   [[bc(117, 3), bc(109, 5), bc(95, 5)], [bc(113, 1), bc(106, 0), bc(93, 0)], [bc(105, 1), bc(99, 1), bc(90, 0)]]],
  // face 17
  [[[bc(105, 0), bc(88, 0), bc(72, 0)], [bc(103, 0), bc(91, 0), bc(73, 3)], [bc(97, 1), bc(89, 3), bc(71, 3)]],
   [[bc(113, 0), bc(99, 0), bc(80, 5)], [bc(116, 1), bc(105, 0), bc(88, 0)], [bc(111, 1), bc(103, 0), bc(91, 0)]],
   [[bc(117, 2), bc(106, 5), bc(90, 5)], [bc(121, 1), bc(113, 0), bc(99, 0)], [bc(119, 1), bc(116, 1), bc(105, 0)]]],
  // face 18
  [[[bc(119, 0), bc(111, 0), bc(97, 0)], [bc(115, 0), bc(110, 0), bc(98, 3)], [bc(107, 1), bc(104, 3), bc(96, 3)]],
   [[bc(121, 0), bc(116, 0), bc(103, 5)], [bc(120, 1), bc(119, 0), bc(111, 0)], [bc(112, 1), bc(115, 0), bc(110, 0)]],
   [[bc(117, 1), bc(113, 5), bc(105, 5)], [bc(118, 1), bc(121, 0), bc(116, 0)], [bc(114, 1), bc(120, 1), bc(119, 0)]]],
  // face 19
  [[[bc(114, 0), bc(112, 0), bc(107, 0)], [bc(100, 0), bc(102, 0), bc(101, 3)], [bc(83, 1), bc(87, 3), bc(85, 3)]],
   [[bc(118, 0), bc(120, 0), bc(115, 5)], [bc(108, 1), bc(114, 0), bc(112, 0)], [bc(92, 1), bc(100, 0), bc(102, 0)]],
   [[bc(117, 0), bc(121, 5), bc(119, 5)], [bc(109, 1), bc(118, 0), bc(120, 0)], [bc(95, 1), bc(108, 1), bc(114, 0)]]],
];

/// Whether the base cell number refers to a pentagon.
#[inline]
#[must_use]
pub(crate) fn is_base_cell_pentagon(base_cell: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  BASE_CELL_DATA[base_cell as usize].is_pentagon
}

/// Whether the base cell is one of the two polar pentagons, whose
/// neighbors are all oriented towards it.
#[inline]
#[must_use]
pub(crate) fn is_base_cell_polar_pentagon(base_cell: i32) -> bool {
  base_cell == 4 || base_cell == 117
}

/// The base cell at a resolution-0 face IJK coordinate, or
/// `INVALID_BASE_CELL` when out of range.
#[inline]
#[must_use]
pub(crate) fn base_cell_at(fijk: &FaceIjk) -> i32 {
  match lookup(fijk) {
    Some(entry) => entry.base_cell,
    None => INVALID_BASE_CELL,
  }
}

/// The ccw rotation count into the base cell at a face IJK coordinate, or
/// `INVALID_ROTATIONS` when out of range.
#[inline]
#[must_use]
pub(crate) fn base_cell_rotations_at(fijk: &FaceIjk) -> i32 {
  match lookup(fijk) {
    Some(entry) => entry.ccw_rot60,
    None => INVALID_ROTATIONS,
  }
}

fn lookup(fijk: &FaceIjk) -> Option<&'static BaseCellRotation> {
  let c = fijk.coord;
  if fijk.face < 0
    || fijk.face >= NUM_ICOSA_FACES
    || c.i < 0
    || c.i > MAX_FACE_COORD
    || c.j < 0
    || c.j > MAX_FACE_COORD
    || c.k < 0
    || c.k > MAX_FACE_COORD
  {
    return None;
  }
  Some(&FACE_IJK_BASE_CELLS[fijk.face as usize][c.i as usize][c.j as usize][c.k as usize])
}

/// Home face and IJK coordinates of a base cell.
#[inline]
#[must_use]
pub(crate) fn base_cell_to_face_ijk(base_cell: i32) -> FaceIjk {
  BASE_CELL_DATA[base_cell as usize].home
}

/// The ccw rotation count for a base cell's coordinate system on the given
/// face, or `INVALID_ROTATIONS` if the base cell does not appear there.
#[must_use]
pub(crate) fn base_cell_rotations_on_face(base_cell: i32, face: i32) -> i32 {
  if face < 0 || face >= NUM_ICOSA_FACES || base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return INVALID_ROTATIONS;
  }
  for i in 0..=MAX_FACE_COORD as usize {
    for j in 0..=MAX_FACE_COORD as usize {
      for k in 0..=MAX_FACE_COORD as usize {
        let entry = &FACE_IJK_BASE_CELLS[face as usize][i][j][k];
        if entry.base_cell == base_cell {
          return entry.ccw_rot60;
        }
      }
    }
  }
  INVALID_ROTATIONS
}

/// Whether `face` is one of a pentagon base cell's clockwise offset faces.
#[inline]
#[must_use]
pub(crate) fn base_cell_is_cw_offset(base_cell: i32, face: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  let data = &BASE_CELL_DATA[base_cell as usize];
  data.is_pentagon && (data.cw_offset_faces[0] == face || data.cw_offset_faces[1] == face)
}

/// The neighboring base cell in the given direction, or
/// `INVALID_BASE_CELL` across a pentagon's deleted k axis.
#[inline]
#[must_use]
pub(crate) fn base_cell_neighbor(base_cell: i32, dir: Digit) -> i32 {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS || dir == Digit::Invalid {
    return INVALID_BASE_CELL;
  }
  BASE_CELL_NEIGHBORS[base_cell as usize][dir as usize]
}

/// The direction from one base cell to a neighboring base cell, or
/// `Digit::Invalid` if they are not adjacent.
#[must_use]
pub(crate) fn base_cell_direction(origin: i32, neighbor: i32) -> Digit {
  if origin < 0 || origin >= NUM_BASE_CELLS || neighbor < 0 || neighbor >= NUM_BASE_CELLS {
    return Digit::Invalid;
  }
  for dir_val in 0..7u64 {
    let dir = Digit::from_bits(dir_val);
    if base_cell_neighbor(origin, dir) == neighbor {
      return dir;
    }
  }
  Digit::Invalid
}

/// The resolution-0 identifier of a base cell.
#[must_use]
pub(crate) fn base_cell_to_cell(base_cell: i32) -> CellIndex {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return CellIndex::NULL;
  }
  crate::cell::make_cell(0, base_cell, Digit::Center)
}
