pub mod books;
pub mod todos;

use folio_kernel::ModuleRegistry;

/// Register all project modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(books::create_module());
    registry.register(todos::create_module());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_modules_register() {
        let mut registry = ModuleRegistry::new();
        register_all(&mut registry);

        assert_eq!(registry.modules().len(), 2);
        assert!(registry.get_module("books").is_some());
        assert!(registry.get_module("todos").is_some());
    }
}
