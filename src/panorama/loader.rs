use crate::panorama::CapabilityError;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type LoadResult<T> = Result<Arc<T>, CapabilityError>;
type LoadFn<T> = dyn Fn() -> BoxFuture<'static, LoadResult<T>> + Send + Sync;

enum LoaderState<T: ?Sized> {
    Uninitialized,
    /// Every caller awaits this one future until it settles.
    Loading(Shared<BoxFuture<'static, LoadResult<T>>>),
    Ready(Arc<T>),
}

/// Loads a capability once and hands the same instance to every caller.
///
/// A failed load puts the loader back into the uninitialized state, so the next call to
/// [`CapabilityLoader::ready`] starts a fresh attempt instead of replaying the failure.
pub struct CapabilityLoader<T: ?Sized> {
    state: Arc<Mutex<LoaderState<T>>>,
    load: Arc<LoadFn<T>>,
}

impl<T: ?Sized> Clone for CapabilityLoader<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            load: Arc::clone(&self.load),
        }
    }
}

impl<T> CapabilityLoader<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    pub fn new<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = LoadResult<T>> + Send + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(LoaderState::Uninitialized)),
            load: Arc::new(move || load().boxed()),
        }
    }

    /// A loader that is ready from the start.
    #[cfg(test)]
    pub fn ready_with(capability: Arc<T>) -> Self {
        let fallback = Arc::clone(&capability);
        Self {
            state: Arc::new(Mutex::new(LoaderState::Ready(capability))),
            load: Arc::new(move || {
                let capability = Arc::clone(&fallback);
                async move { Ok(capability) }.boxed()
            }),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.lock(), LoaderState::Ready(_))
    }

    pub async fn ready(&self) -> LoadResult<T> {
        let in_flight = {
            let mut state = self.lock();
            match &*state {
                LoaderState::Ready(capability) => return Ok(Arc::clone(capability)),
                LoaderState::Loading(in_flight) => in_flight.clone(),
                LoaderState::Uninitialized => {
                    tracing::info!("Loading the panorama capability.");
                    let in_flight = (self.load)().shared();
                    *state = LoaderState::Loading(in_flight.clone());
                    in_flight
                }
            }
        };

        let result = in_flight.clone().await;

        let mut state = self.lock();
        if let LoaderState::Loading(current) = &*state {
            // Only the attempt that is still registered may settle the state.
            if current.ptr_eq(&in_flight) {
                *state = match &result {
                    Ok(capability) => LoaderState::Ready(Arc::clone(capability)),
                    Err(err) => {
                        tracing::warn!("Panorama capability failed to load: {err}");
                        LoaderState::Uninitialized
                    }
                };
            }
        }
        result
    }

    fn lock(&self) -> MutexGuard<'_, LoaderState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
