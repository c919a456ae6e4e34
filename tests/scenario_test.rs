#![recursion_limit = "256"]
//! End-to-end scenarios over mixed scalar and array lists.

use tola_typelist::prelude::*;

mod scalars {
    use super::*;

    type C = typelist![f64, f32, i32, u8, i32, u8, f32, f64];

    #[test]
    fn test_size_and_membership() {
        assert_eq!(<C as TypeList>::LEN, 8);
        assert!(<C as Contains<typelist![i32]>>::VALUE);
        assert_eq!(<Pushed<C, String> as TypeList>::LEN, 9);
    }

    #[test]
    fn test_to_set() {
        type Set = Unique<C>;
        assert_type_eq!(Set, typelist![f64, f32, i32, u8]);
        assert_eq!(<Set as TypeList>::LEN, 4);
    }

    #[test]
    fn test_slice_front() {
        assert_type_eq!(Sliced<C, 0, 3>, typelist![f64, f32, i32]);
    }

    #[test]
    fn test_sort_groups_by_size() {
        // 1-byte group, then 4-byte group in original order, then 8-byte.
        assert_type_eq!(Sorted<C>, typelist![u8, u8, f32, i32, i32, f32, f64, f64]);
        assert_eq!(values!(Sorted<C>, SizeOf), [1, 1, 4, 4, 4, 4, 8, 8]);
    }
}

mod arrays {
    use super::*;

    type C = typelist![[i32; 1], [i32; 2], [i32; 3], u8, u8, i32, i32, f32];

    #[test]
    fn test_sizes() {
        assert_eq!(values!(C, SizeOf), [4, 8, 12, 1, 1, 4, 4, 4]);
        assert_eq!(<<[i32; 3] as StorageSize>::Size as Value>::VALUE, 12);
    }

    #[test]
    fn test_default_sort() {
        assert_type_eq!(
            Sorted<C>,
            typelist![u8, u8, [i32; 1], i32, i32, f32, [i32; 2], [i32; 3]]
        );
    }

    #[test]
    fn test_distinct_then_sort() {
        assert_type_eq!(
            Sorted<Unique<C>>,
            typelist![u8, [i32; 1], i32, f32, [i32; 2], [i32; 3]]
        );
    }
}
