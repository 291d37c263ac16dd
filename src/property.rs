use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct ListenerId;
}

// Single-threaded observable value. Listeners fire only when the value
// actually changes, and stay registered until explicitly unsubscribed or
// the property is dropped.
pub struct Property<T> {
    value: T,
    listeners: SlotMap<ListenerId, Box<dyn FnMut(&T)>>,
}

impl<T> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: SlotMap::with_key(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T)
    where
        T: PartialEq,
    {
        if self.value == value {
            return;
        }
        self.value = value;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.value);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> ListenerId {
        self.listeners.insert(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
