use crate::maze::WALL;
use grid_util::point::Point;

/// Renders the map as text, one row per line: `x` for points on `path`, `#` for walls and
/// `.` for floor. Path points outside the map are ignored.
pub fn serialize_board(map: &[u8], width: usize, height: usize, path: &[Point]) -> String {
    // One extra column per row for the line break
    let print_width = width + 1;
    let mut board = vec![b'\n'; height * print_width];
    for y in 0..height {
        for x in 0..width {
            board[y * print_width + x] = if map[y * width + x] == WALL { b'#' } else { b'.' };
        }
    }
    for p in path {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height {
            board[p.y as usize * print_width + p.x as usize] = b'x';
        }
    }
    board.into_iter().map(char::from).collect()
}
