#[cfg(test)]
mod tests {
    use crate::value::{I60_MAX, I60_MIN};
    use crate::{atom, Value};

    #[test]
    fn test_tagged_int_basics() {
        let v = Value::int(123);
        assert!(v.is_int());
        assert!(v.is_any_integer());
        assert!(!v.is_obj());
        assert_eq!(v.as_int(), Some(123));

        let v_neg = Value::int(-99);
        assert!(v_neg.is_int());
        assert_eq!(v_neg.as_int(), Some(-99));
    }

    #[test]
    fn test_tagged_int_i60_range() {
        let v_max = Value::int(I60_MAX);
        assert_eq!(v_max.as_int(), Some(I60_MAX));

        let v_min = Value::int(I60_MIN);
        assert_eq!(v_min.as_int(), Some(I60_MIN));
    }

    #[test]
    fn test_tagged_int_sign_extension() {
        let v = Value::int(-1);
        assert_eq!(v.as_int(), Some(-1));

        let v2 = Value::int(-1_000_000);
        assert_eq!(v2.as_int(), Some(-1_000_000));
    }

    #[test]
    fn test_tagged_atoms() {
        let ok = Value::atom(atom::OK);
        let err = Value::atom(atom::ERROR);
        assert!(ok.is_atom());
        assert!(!ok.is_obj());
        assert_eq!(ok.as_atom(), Some(atom::OK));
        assert_eq!(err.as_atom(), Some(atom::ERROR));
        assert_ne!(ok, err);
        assert_eq!(atom::name(atom::OK), Some("ok"));
        assert_eq!(atom::name(atom::ERROR), Some("error"));
        assert_eq!(atom::name(99), None);
    }

    #[test]
    fn test_tagged_handles() {
        let b = Value::binary(7);
        assert!(b.is_binary());
        assert!(b.is_obj());
        assert!(!b.is_any_integer());
        assert_eq!(b.as_handle(), Some(7));
        assert_eq!(b.as_int(), None);

        let t = Value::tuple(3);
        assert!(t.is_tuple());
        assert_eq!(t.as_handle(), Some(3));

        let bi = Value::boxed_int(0);
        assert!(bi.is_boxed_int());
        assert!(bi.is_any_integer());
        assert_eq!(bi.as_handle(), Some(0));
    }

    #[test]
    fn test_immediates_carry_no_handle() {
        assert_eq!(Value::int(5).as_handle(), None);
        assert_eq!(Value::atom(atom::OK).as_handle(), None);
    }
}
