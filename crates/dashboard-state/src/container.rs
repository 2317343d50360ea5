//! Observable value holders.
//!
//! A [`StateContainer`] holds one value. Consumers read it with `get`,
//! replace it with `set`/`update`, and watch it with `subscribe`. Every
//! subscription starts with the current value and then yields the latest
//! value after each change; changes made while a subscriber is not polling
//! collapse into the most recent one.

use futures::stream::BoxStream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Stream of values handed out by [`StateContainer::subscribe`].
pub type Subscription<T> = BoxStream<'static, T>;

/// An observable holder of the latest value.
pub trait StateContainer<T>: Send + Sync {
    /// Current value.
    fn get(&self) -> T;

    /// Replace the value and notify subscribers.
    fn set(&self, value: T);

    /// Modify the value in place and notify subscribers.
    fn update(&self, f: &mut dyn FnMut(&mut T));

    /// Watch the value, starting with the current one.
    fn subscribe(&self) -> Subscription<T>;
}

/// [`StateContainer`] backed by a `tokio::sync::watch` channel.
#[derive(Debug)]
pub struct WatchContainer<T> {
    sender: watch::Sender<T>,
}

impl<T> WatchContainer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T> Default for WatchContainer<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> StateContainer<T> for WatchContainer<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    fn update(&self, f: &mut dyn FnMut(&mut T)) {
        self.sender.send_modify(|value| f(value));
    }

    fn subscribe(&self) -> Subscription<T> {
        Box::pin(WatchStream::new(self.sender.subscribe()))
    }
}
