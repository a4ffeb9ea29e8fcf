// ============================================================================
// NOTIFICATION STATE - Cola acotada de banners visibles
// ============================================================================
// Cada banner tiene sus propios timers; la cola solo limita cuántos hay a la
// vez. Lleno = se expulsa el más antiguo antes de mostrar el nuevo.
// ============================================================================

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::Result;
use crate::models::{Notification, Severity};

struct NotificationQueue {
    capacity: usize,
    next_id: u64,
    visible: VecDeque<u64>,
}

#[derive(Clone)]
pub struct NotificationState {
    queue: Rc<RefCell<NotificationQueue>>,
}

/// Resultado de encolar: la notificación nueva y, si hizo falta, la expulsada
#[derive(Debug, PartialEq)]
pub struct Pushed {
    pub notification: Notification,
    pub evicted: Option<u64>,
}

impl NotificationState {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Rc::new(RefCell::new(NotificationQueue {
                capacity: capacity.max(1),
                next_id: 0,
                visible: VecDeque::new(),
            })),
        }
    }

    pub fn push(&self, message: impl Into<String>, severity: Severity) -> Pushed {
        let mut queue = self.queue.borrow_mut();
        let evicted = if queue.visible.len() >= queue.capacity {
            queue.visible.pop_front()
        } else {
            None
        };

        let id = queue.next_id;
        queue.next_id += 1;
        queue.visible.push_back(id);

        Pushed {
            notification: Notification {
                id,
                message: message.into(),
                severity,
            },
            evicted,
        }
    }

    /// Encolar y pintar. Si `render` falla, la entrada se retira de la cola
    /// para que no ocupe un hueco sin banner en pantalla.
    pub fn push_with<F>(&self, message: impl Into<String>, severity: Severity, render: F) -> Result<Pushed>
    where
        F: FnOnce(&Pushed) -> Result<()>,
    {
        let pushed = self.push(message, severity);
        if let Err(e) = render(&pushed) {
            self.remove(pushed.notification.id);
            return Err(e);
        }
        Ok(pushed)
    }

    /// Quitar al terminar su animación de salida. false si ya no estaba
    pub fn remove(&self, id: u64) -> bool {
        let mut queue = self.queue.borrow_mut();
        match queue.visible.iter().position(|v| *v == id) {
            Some(pos) => {
                queue.visible.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.queue.borrow().visible.len()
    }

    pub fn capacity(&self) -> usize {
        self.queue.borrow().capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelpdeskError;

    #[test]
    fn three_calls_give_three_visible_banners() {
        let state = NotificationState::new(5);
        let ids: Vec<u64> = (0..3)
            .map(|i| state.push(format!("msg {}", i), Severity::Info).notification.id)
            .collect();
        assert_eq!(state.visible_count(), 3);
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn each_banner_is_removed_independently() {
        let state = NotificationState::new(5);
        let first = state.push("uno", Severity::Success).notification.id;
        let second = state.push("dos", Severity::Danger).notification.id;

        assert!(state.remove(first));
        assert_eq!(state.visible_count(), 1);
        assert!(!state.remove(first));
        assert!(state.remove(second));
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn full_queue_evicts_oldest() {
        let state = NotificationState::new(2);
        assert_eq!(state.push("a", Severity::Info).evicted, None);
        assert_eq!(state.push("b", Severity::Info).evicted, None);
        let pushed = state.push("c", Severity::Info);
        assert_eq!(pushed.evicted, Some(0));
        assert_eq!(pushed.notification.id, 2);
        assert_eq!(state.visible_count(), 2);
        // el timer del expulsado llega tarde y no encuentra nada
        assert!(!state.remove(0));
    }

    #[test]
    fn rapid_calls_never_exceed_capacity() {
        let state = NotificationState::new(3);
        for i in 0..100 {
            state.push(format!("spam {}", i), Severity::Danger);
        }
        assert_eq!(state.visible_count(), 3);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let state = NotificationState::new(0);
        assert_eq!(state.capacity(), 1);
        state.push("solo", Severity::Info);
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn failed_render_does_not_leave_a_slot_taken() {
        let state = NotificationState::new(5);
        state.push("visible", Severity::Info);

        let result = state.push_with("roto", Severity::Danger, |_| {
            Err(HelpdeskError::Dom("appendChild falló".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(state.visible_count(), 1);

        let ok = state.push_with("bien", Severity::Success, |_| Ok(()));
        assert!(ok.is_ok());
        assert_eq!(state.visible_count(), 2);
    }
}
