//! Navigation router for screen transitions

use super::state::Screen;

/// Route represents a navigation path
#[derive(Clone, Debug)]
pub struct Route {
    /// The screen to display
    pub screen: Screen,
    /// Title for breadcrumb
    pub title: String,
}

impl Route {
    pub fn new(screen: Screen, title: impl Into<String>) -> Self {
        Self {
            screen,
            title: title.into(),
        }
    }
}

/// Router manages navigation history
#[derive(Debug, Default)]
pub struct Router {
    /// Navigation history stack
    history: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new route onto the history
    pub fn push(&mut self, screen: Screen) {
        self.history
            .push(Route::new(screen, Self::screen_title(screen)));
    }

    /// Go back to the previous screen
    pub fn back(&mut self) -> Option<Screen> {
        self.history.pop();
        self.history.last().map(|r| r.screen)
    }

    /// Get the current route
    pub fn current(&self) -> Option<&Route> {
        self.history.last()
    }

    /// Get the breadcrumb trail
    pub fn breadcrumb(&self) -> String {
        self.history
            .iter()
            .map(|r| r.title.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }

    /// Replace the whole history with a single route
    pub fn reset_to(&mut self, screen: Screen) {
        self.history.clear();
        self.push(screen);
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Get title for a screen
    pub fn screen_title(screen: Screen) -> &'static str {
        match screen {
            Screen::Login => "Sign In",
            Screen::DoctorList => "Find a Doctor",
            Screen::DoctorProfile => "Doctor Profile",
            Screen::BookAppointment => "Book Appointment",
            Screen::OtpVerification => "OTP Code Verification",
            Screen::Help => "Help",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_back_walk_the_stack() {
        let mut router = Router::new();
        router.push(Screen::Login);
        router.push(Screen::DoctorList);
        router.push(Screen::DoctorProfile);

        assert!(router.can_go_back());
        assert_eq!(router.back(), Some(Screen::DoctorList));
        assert_eq!(router.back(), Some(Screen::Login));
        assert_eq!(router.back(), None);
    }

    #[test]
    fn breadcrumb_joins_titles() {
        let mut router = Router::new();
        router.push(Screen::DoctorList);
        router.push(Screen::DoctorProfile);
        assert_eq!(router.breadcrumb(), "Find a Doctor > Doctor Profile");
    }

    #[test]
    fn reset_collapses_history() {
        let mut router = Router::new();
        router.push(Screen::Login);
        router.push(Screen::DoctorList);
        router.reset_to(Screen::DoctorList);
        assert!(!router.can_go_back());
    }
}
