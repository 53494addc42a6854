//! Tests for the class bit set

#[cfg(test)]
mod tests {
    use phonodrift::phonology::classes::ClassSet;
    use phonodrift::phonology::symbols::Class;

    #[test]
    fn test_insert_and_contains() {
        let mut set = ClassSet::new();
        assert!(set.is_empty());

        set.insert(Class::Vowel);
        assert!(set.contains(Class::Vowel));
        assert!(!set.contains(Class::Consonant));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_all_contains_every_class() {
        let set = ClassSet::all();
        assert_eq!(set.count(), Class::COUNT);
        assert_eq!(set.to_vec(), Class::ALL.to_vec());
    }

    #[test]
    fn test_intersection() {
        let a: ClassSet = [Class::Consonant, Class::Vowel].into_iter().collect();
        let b: ClassSet = [Class::Vowel, Class::Boundary].into_iter().collect();

        let both = a.intersection(&b);
        assert_eq!(both.to_vec(), vec![Class::Vowel]);

        let none = a.intersection(&[Class::Nasal].into_iter().collect());
        assert!(none.is_empty());
    }

    #[test]
    fn test_display_lists_members() {
        let set: ClassSet = [Class::Vowel, Class::Consonant].into_iter().collect();
        assert_eq!(set.to_string(), "{C,V}");
        assert_eq!(ClassSet::new().to_string(), "{}");
    }
}
