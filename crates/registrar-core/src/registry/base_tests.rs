    use super::*;
    use crate::error::FactoryError;
    use crate::registry::Constructor;

    // Simple test factory; these tests use local registries, not its static one
    struct Numbers;

    impl Factory for Numbers {
        type Product = u32;
        type Args = u32;
        type Error = FactoryError;

        crate::factory_registry!(Numbers);
    }

    struct Doubler;

    fn entry(name: &str, offset: u32) -> Registration<Numbers> {
        let constructor: Constructor<Numbers> = Arc::new(move |n: u32| -> Result<Box<u32>, FactoryError> {
            Ok(Box::new(n + offset))
        });
        Registration::from_fn(name, constructor)
    }

    fn typed_entry<T: 'static>(name: &str) -> Registration<Numbers> {
        let constructor: Constructor<Numbers> = Arc::new(|n: u32| -> Result<Box<u32>, FactoryError> {
            Ok(Box::new(n * 2))
        });
        Registration::of_type::<T>(name, constructor)
    }

    #[test]
    fn test_registry_new() {
        let registry: Registry<Numbers> = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_registry_default() {
        let registry: Registry<Numbers> = Registry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_insert() {
        let registry: Registry<Numbers> = Registry::new();

        let replaced = registry.insert(entry("plus-one", 1));
        assert!(replaced.is_none());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_insert_duplicate_replaces() {
        let registry: Registry<Numbers> = Registry::new();
        registry.insert(entry("add", 1));

        let replaced = registry.insert(entry("add", 10));
        assert_eq!(replaced.map(|r| r.name().to_string()), Some("add".to_string()));
        assert_eq!(registry.len(), 1);

        let current = registry.get("add").unwrap();
        assert_eq!(*current.construct(5).unwrap(), 15);
    }

    #[test]
    fn test_get() {
        let registry: Registry<Numbers> = Registry::new();
        registry.insert(entry("plus-two", 2));

        let retrieved = registry.get("plus-two");
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name(), "plus-two");
    }

    #[test]
    fn test_get_nonexistent() {
        let registry: Registry<Numbers> = Registry::new();
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_contains() {
        let registry: Registry<Numbers> = Registry::new();

        assert!(!registry.contains("plus-one"));
        registry.insert(entry("plus-one", 1));
        assert!(registry.contains("plus-one"));
    }

    #[test]
    fn test_names() {
        let registry: Registry<Numbers> = Registry::new();
        registry.insert(entry("a", 1));
        registry.insert(entry("b", 2));

        let names = registry.names();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"a".to_string()));
        assert!(names.contains(&"b".to_string()));
    }

    #[test]
    fn test_name_of_tracks_last_registration() {
        let registry: Registry<Numbers> = Registry::new();
        assert!(registry.name_of(TypeId::of::<Doubler>()).is_none());

        registry.insert(typed_entry::<Doubler>("double"));
        assert_eq!(registry.name_of(TypeId::of::<Doubler>()).as_deref(), Some("double"));

        registry.insert(typed_entry::<Doubler>("twice"));
        assert_eq!(registry.name_of(TypeId::of::<Doubler>()).as_deref(), Some("twice"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_fn_registration_has_no_stamp() {
        let registry: Registry<Numbers> = Registry::new();
        registry.insert(entry("plain", 0));

        let plain = registry.get("plain").unwrap();
        assert!(plain.type_id().is_none());
        assert!(plain.type_name().is_none());
        assert!(!plain.is::<Doubler>());
    }

    #[test]
    fn test_iter() {
        let registry: Registry<Numbers> = Registry::new();
        registry.insert(entry("a", 1));
        registry.insert(typed_entry::<Doubler>("b"));

        let items: Vec<_> = registry.iter().collect();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_registration_debug() {
        let registration = typed_entry::<Doubler>("double");
        let debug = format!("{:?}", registration);
        assert!(debug.contains("double"));
        assert!(debug.contains("Doubler"));
    }

    #[test]
    fn test_insert_while_iterating() {
        let registry: Registry<Numbers> = Registry::new();
        for i in 0..200 {
            registry.insert(entry(&format!("n{i}"), i));
        }

        for registration in registry.iter() {
            registry.insert(entry(&format!("{}-copy", registration.name()), 0));
        }

        assert_eq!(registry.len(), 400);
        assert!(registry.contains("n199-copy"));
    }
