/// Items of `a` that also appear in `b`, in `a`'s order.
pub fn common_items<'a, T: PartialEq>(a: &'a [T], b: &[T]) -> Vec<&'a T> {
    a.iter().filter(|item| b.contains(item)).collect()
}

/// Share of `a` found in `b`, relative to the longer list. `0.0` when both
/// are empty.
pub fn overlap_ratio<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }
    common_items(a, b).len() as f64 / longest as f64
}

pub fn join_items<T: AsRef<str>>(items: &[T], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_items_keeps_left_order() {
        let a = ["c", "a", "b"];
        let b = ["a", "c"];
        assert_eq!(common_items(&a, &b), vec![&"c", &"a"]);
    }

    #[test]
    fn test_overlap_ratio() {
        assert_eq!(overlap_ratio(&["music", "travel"], &["music", "coding"]), 0.5);
        assert_eq!(overlap_ratio::<&str>(&[], &[]), 0.0);
        assert_eq!(overlap_ratio(&["x"], &["a", "b", "c", "d"]), 0.0);
    }

    #[test]
    fn test_join_items_limit() {
        assert_eq!(join_items(&["a", "b", "c", "d"], 3), "a, b, c");
        assert_eq!(join_items::<&str>(&[], 3), "");
    }
}
