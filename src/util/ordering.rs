//! Ordering helpers.

/// Return the greater of `i` and `j` by `>`; on a tie (or an incomparable
/// pair such as NaN) the second argument wins.
pub fn max<T: PartialOrd>(i: T, j: T) -> T {
    if i > j {
        i
    } else {
        j
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, PartialOrd)]
    struct Version {
        number: u32,
        label: &'static str,
    }

    #[test]
    fn test_max() {
        assert_eq!(max(3, 5), 5);
        assert_eq!(max(5, 3), 5);
        assert_eq!(max(4, 4), 4);
        assert_eq!(max("apple", "banana"), "banana");
    }

    #[test]
    fn test_tie_returns_second() {
        let a = (1, "first");
        let b = (1, "first");
        assert!(std::ptr::eq(max(&a, &b), &b));
    }

    #[test]
    fn test_incomparable_returns_second() {
        assert_eq!(max(f64::NAN, 1.0), 1.0);
        assert!(max(1.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_struct_ordering() {
        let older = Version { number: 1, label: "b" };
        let newer = Version { number: 2, label: "a" };
        assert_eq!(max(older, newer).label, "a");
    }
}
