/// Visits a rectangular matrix in clockwise spiral order.
///
/// Four half-open boundaries shrink one layer at a time: top row left to
/// right, right column downwards, then the bottom row and left column
/// backwards. The last two legs only run while a row or column is still
/// left, which keeps single-row and single-column remainders from being
/// visited twice.
///
/// # Panics
///
/// Rows shorter than the first one index out of bounds; the matrix must be
/// rectangular.
pub fn spiral_order<T: Clone>(matrix: &[Vec<T>]) -> Vec<T> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    let mut order = Vec::with_capacity(rows * cols);

    let (mut top, mut bottom) = (0, rows);
    let (mut left, mut right) = (0, cols);

    while top < bottom && left < right {
        for col in left..right {
            order.push(matrix[top][col].clone());
        }
        top += 1;

        for row in top..bottom {
            order.push(matrix[row][right - 1].clone());
        }
        right -= 1;

        if top < bottom {
            for col in (left..right).rev() {
                order.push(matrix[bottom - 1][col].clone());
            }
            bottom -= 1;
        }

        if left < right {
            for row in (top..bottom).rev() {
                order.push(matrix[row][left].clone());
            }
            left += 1;
        }
    }

    order
}
