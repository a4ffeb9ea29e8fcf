// ============================================================================
// STAGING STATE - Lista de archivos adjuntos pendientes
// ============================================================================
// El orden es el de selección. No hay deduplicación: el mismo archivo puede
// aparecer dos veces. Los índices solo son estables entre mutaciones.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Attachment;

#[derive(Clone, Default)]
pub struct StagingState {
    files: Rc<RefCell<Vec<Attachment>>>,
}

impl StagingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar al final, en el orden recibido
    pub fn add<I>(&self, new_files: I)
    where
        I: IntoIterator<Item = Attachment>,
    {
        self.files.borrow_mut().extend(new_files);
    }

    /// Quitar por índice actual. Fuera de rango = no-op
    pub fn remove_at(&self, index: usize) -> Option<Attachment> {
        let mut files = self.files.borrow_mut();
        if index < files.len() {
            Some(files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&self) {
        self.files.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }

    /// Copia del contenido actual (para renderizar sin mantener el borrow)
    pub fn snapshot(&self) -> Vec<Attachment> {
        self.files.borrow().clone()
    }
}
