//! Holder of the screen-visible auth state plus the action that mutates it.
//!
//! The state lives in a `tokio::sync::watch` cell: writes are published to
//! every subscriber synchronously, and a late subscriber sees the current
//! value immediately.
//!
//! ## Overlapping submits
//!
//! `login` spawns one task per accepted call. While that task is in flight,
//! further calls are dropped (and report it by returning `false`) rather than
//! racing last-write-wins against the state cell. See DESIGN.md.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use super::service::AuthService;
use super::AuthState;

/// View model for the login screen.
pub struct LoginViewModel {
    service: AuthService,
    state_tx: watch::Sender<AuthState>,
    // Held so the sender always has at least one receiver.
    state_rx: watch::Receiver<AuthState>,
    in_flight: Arc<AtomicBool>,
}

impl LoginViewModel {
    pub fn new(service: AuthService) -> Self {
        let (state_tx, state_rx) = watch::channel(AuthState::Unauthorized);
        Self {
            service,
            state_tx,
            state_rx,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> AuthState {
        *self.state_rx.borrow()
    }

    /// Starts one asynchronous login attempt against the current credentials.
    ///
    /// Returns `false` (dropping the submit) if an attempt is already in
    /// flight. Otherwise the outcome is published as `Authorized` or
    /// `Error(kind)` once the service call completes.
    ///
    /// Must be called from within a tokio runtime.
    pub fn login(&self, username: &str, password: &str) -> bool {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::debug!("login already in flight, dropping submit");
            return false;
        }

        let service = self.service.clone();
        let state_tx = self.state_tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let username = username.to_string();
        let password = password.to_string();

        tokio::spawn(async move {
            let next = match service.login(&username, &password).await {
                Ok(()) => AuthState::Authorized,
                Err(err) => AuthState::Error(err),
            };
            // Clear the guard before publishing: once observers see the new
            // state, a fresh submit is accepted.
            in_flight.store(false, Ordering::Release);
            let _ = state_tx.send(next);
        });

        true
    }
}

#[cfg(test)]
mod tests {
    use futures_util::future::BoxFuture;
    use tokio::sync::Notify;

    use super::super::repository::AuthRepository;
    use super::super::AuthenticationError;
    use super::*;

    struct FixedRepo(Result<(), AuthenticationError>);

    impl AuthRepository for FixedRepo {
        fn login<'a>(
            &'a self,
            _username: &'a str,
            _password: &'a str,
        ) -> BoxFuture<'a, Result<(), AuthenticationError>> {
            let result = self.0;
            Box::pin(async move { result })
        }
    }

    /// Repository that blocks until released, for in-flight tests.
    struct BlockingRepo {
        release: Arc<Notify>,
    }

    impl AuthRepository for BlockingRepo {
        fn login<'a>(
            &'a self,
            _username: &'a str,
            _password: &'a str,
        ) -> BoxFuture<'a, Result<(), AuthenticationError>> {
            let release = Arc::clone(&self.release);
            Box::pin(async move {
                release.notified().await;
                Ok(())
            })
        }
    }

    fn view_model_with(result: Result<(), AuthenticationError>) -> LoginViewModel {
        LoginViewModel::new(AuthService::new(Arc::new(FixedRepo(result))))
    }

    /// Initial state is Unauthorized; success publishes Authorized.
    #[tokio::test]
    async fn test_successful_login_publishes_authorized() {
        let vm = view_model_with(Ok(()));
        assert_eq!(vm.state(), AuthState::Unauthorized);

        let mut rx = vm.subscribe();
        assert!(vm.login("alice", "correct"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), AuthState::Authorized);
        assert_eq!(vm.state(), AuthState::Authorized);
    }

    /// A failed login publishes the mapped error, overwriting the old state.
    #[tokio::test]
    async fn test_failed_login_publishes_error() {
        let vm = view_model_with(Err(AuthenticationError::Unauthorized));
        let mut rx = vm.subscribe();

        assert!(vm.login("alice", "wrong"));
        rx.changed().await.unwrap();
        assert_eq!(
            *rx.borrow(),
            AuthState::Error(AuthenticationError::Unauthorized)
        );
    }

    /// Two sequential logins with the same server behavior end in the same
    /// state both times.
    #[tokio::test]
    async fn test_sequential_logins_are_idempotent() {
        let vm = view_model_with(Ok(()));
        let mut rx = vm.subscribe();

        assert!(vm.login("alice", "correct"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), AuthState::Authorized);

        assert!(vm.login("alice", "correct"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), AuthState::Authorized);
    }

    /// A submit while another attempt is in flight is dropped.
    #[tokio::test]
    async fn test_concurrent_submit_is_dropped() {
        let release = Arc::new(Notify::new());
        let repo = BlockingRepo {
            release: Arc::clone(&release),
        };
        let vm = LoginViewModel::new(AuthService::new(Arc::new(repo)));
        let mut rx = vm.subscribe();

        assert!(vm.login("alice", "correct"));
        assert!(!vm.login("alice", "correct"));

        release.notify_one();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), AuthState::Authorized);

        // Once the outcome is published, a fresh submit is accepted again.
        assert!(vm.login("alice", "correct"));
        release.notify_one();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), AuthState::Authorized);
    }
}
