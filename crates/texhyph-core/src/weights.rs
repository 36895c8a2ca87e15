// Break-weight vectors
//
// A weight sits between two letters. Odd weights allow a break, even
// weights forbid it, and overlapping rules are resolved by taking the
// larger value.

/// A single break weight.
pub type Weight = u32;

/// Check whether a weight allows a break.
#[inline]
pub fn is_break(weight: Weight) -> bool {
    weight % 2 == 1
}

/// Merge `local` into `global` by elementwise maximum, with `local[k]`
/// landing on `global[offset + k]`.
///
/// Entries of `local` that would fall past the end of `global` are ignored.
pub fn merge_max(global: &mut [Weight], offset: usize, local: &[Weight]) {
    let Some(target) = global.get_mut(offset..) else {
        return;
    };
    for (g, &l) in target.iter_mut().zip(local) {
        if l > *g {
            *g = l;
        }
    }
}

/// Render a weight vector as `[0, 1, 0]`.
pub fn format_weights(weights: &[Weight]) -> String {
    let items: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
    format!("[{}]", items.join(", "))
}
