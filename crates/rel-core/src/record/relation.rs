use super::{Record, Reflect};
use crate::schema::Cardinality;

/// Access to the related records stored in an association field.
///
/// Implemented for `Vec<T>` (many), `Option<T>` and `Box<T>` (one), and by
/// `#[derive(Record)]` for the record type itself (one, stored inline).
pub trait Relation {
    /// Loaded associations are cascaded; unloaded ones are left untouched.
    fn is_loaded(&self) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the related record at `index`, appending a default record
    /// when `index` is one past the end.
    fn get_or_insert(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

/// Static information about an association field type.
pub trait RelationField: Relation {
    type Target: Record;

    fn cardinality() -> Cardinality;
}

impl<T: Record + Default> Relation for Vec<T> {
    fn is_loaded(&self) -> bool {
        true
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|record| record as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|record| record as &mut dyn Reflect)
    }

    fn get_or_insert(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        if index == Vec::len(self) {
            self.push(T::default());
        }

        Relation::get_mut(self, index)
    }
}

impl<T: Record + Default> RelationField for Vec<T> {
    type Target = T;

    fn cardinality() -> Cardinality {
        Cardinality::Many
    }
}

impl<T: Record + Default> Relation for Option<T> {
    fn is_loaded(&self) -> bool {
        self.is_some()
    }

    fn len(&self) -> usize {
        usize::from(self.is_some())
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        match (index, self) {
            (0, Some(record)) => Some(record as &dyn Reflect),
            _ => None,
        }
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        match (index, self) {
            (0, Some(record)) => Some(record as &mut dyn Reflect),
            _ => None,
        }
    }

    fn get_or_insert(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        if index != 0 {
            return None;
        }

        Some(self.get_or_insert_with(T::default) as &mut dyn Reflect)
    }
}

impl<T: Record + Default> RelationField for Option<T> {
    type Target = T;

    fn cardinality() -> Cardinality {
        Cardinality::One
    }
}

impl<T: Record> Relation for Box<T> {
    fn is_loaded(&self) -> bool {
        !super::is_blank(&**self)
    }

    fn len(&self) -> usize {
        1
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        (index == 0).then(|| &**self as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        if index == 0 {
            Some(&mut **self as &mut dyn Reflect)
        } else {
            None
        }
    }

    fn get_or_insert(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        Relation::get_mut(self, index)
    }
}

impl<T: Record> RelationField for Box<T> {
    type Target = T;

    fn cardinality() -> Cardinality {
        Cardinality::One
    }
}
