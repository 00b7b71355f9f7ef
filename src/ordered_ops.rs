use std::cmp::Ordering;

/// Linear merge of two sequences sharing a total key order, the
/// workhorse behind polynomial addition: both inputs come sorted by
/// strictly decreasing exponent, and the output keeps that order.
///
/// `cmp` orders two heads, and the one comparing `Less` is emitted
/// first. On a tie the heads are fused with `combine`; a `None` result
/// means the values cancelled and nothing is emitted for that key.
pub fn sum<T>(
    mut a_iter: impl Iterator<Item = T>,
    mut b_iter: impl Iterator<Item = T>,
    cmp: impl Fn(&T, &T) -> Ordering,
    combine: impl Fn(T, T) -> Option<T>,
) -> Vec<T> {
    let mut output = Vec::new();

    let mut a = a_iter.next();
    let mut b = b_iter.next();

    loop {
        match (a, b) {
            (Some(va), Some(vb)) => match cmp(&va, &vb) {
                Ordering::Less => {
                    output.push(va);
                    a = a_iter.next();
                    b = Some(vb);
                }
                Ordering::Greater => {
                    output.push(vb);
                    a = Some(va);
                    b = b_iter.next();
                }
                Ordering::Equal => {
                    if let Some(fused) = combine(va, vb) {
                        output.push(fused);
                    }
                    a = a_iter.next();
                    b = b_iter.next();
                }
            },
            (Some(va), None) => {
                output.push(va);
                output.extend(a_iter);
                break;
            }
            (None, Some(vb)) => {
                output.push(vb);
                output.extend(b_iter);
                break;
            }
            (None, None) => break,
        }
    }

    output
}
