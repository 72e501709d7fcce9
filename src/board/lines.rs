/// Three cell indices that win when held by one mark.
pub type Line = [usize; 3];

/// Every winning line, in scan order: rows top to bottom, columns left to right,
/// main diagonal, anti-diagonal.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
