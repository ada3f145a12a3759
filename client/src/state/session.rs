//! Simulated login session and role-based card composition.
//!
//! DESIGN
//! ======
//! The session is a four-phase machine:
//! `RoleSelection -> LoginForm -> Loading -> Dashboard`, with logout (or
//! "choose another role") resetting everything back to `RoleSelection`.
//! No credential is checked beyond non-emptiness and no request is sent;
//! `Loading` simply lasts [`LOGIN_DELAY_MS`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// How long the simulated login spinner is shown.
pub const LOGIN_DELAY_MS: u32 = 1200;

pub const FILL_ALL_FIELDS_MESSAGE: &str = "Fill all fields correctly.";

/// Client-side role label. Controls which cards render; carries no
/// server-side permission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Manufacturer,
    Wholesaler,
    Retailer,
    Customer,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Manufacturer, Self::Wholesaler, Self::Retailer, Self::Customer];

    /// Capitalized display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Manufacturer => "Manufacturer",
            Self::Wholesaler => "Wholesaler",
            Self::Retailer => "Retailer",
            Self::Customer => "Customer",
        }
    }

    /// Lowercase identifier, as shown in the profile's role field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manufacturer => "manufacturer",
            Self::Wholesaler => "wholesaler",
            Self::Retailer => "retailer",
            Self::Customer => "customer",
        }
    }

    /// Cards shown on this role's dashboard, in render order.
    #[must_use]
    pub fn cards(self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(5);
        if self == Self::Manufacturer {
            cards.push(Card::AddProduct);
        }
        cards.push(Card::Inventory);
        if matches!(self, Self::Retailer | Self::Customer) {
            cards.push(Card::Orders);
        }
        if matches!(self, Self::Retailer | Self::Wholesaler) {
            cards.push(Card::Payments);
        }
        cards.push(Card::Profile);
        cards
    }
}

/// Dashboard card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Card {
    AddProduct,
    Inventory,
    Orders,
    Payments,
    Profile,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    RoleSelection,
    LoginForm,
    Loading,
    Dashboard,
}

/// Session shell state. Cleared wholesale on logout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub role: Option<Role>,
    pub email: String,
    pub password: String,
    pub error: String,
}

impl SessionState {
    /// Pick a role and show the login form.
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
        self.phase = SessionPhase::LoginForm;
        self.error.clear();
    }

    /// Submit the login form. Returns `true` when the session moved to
    /// `Loading` and the caller should start the login delay.
    pub fn submit_login(&mut self) -> bool {
        if self.phase != SessionPhase::LoginForm {
            return false;
        }
        self.error.clear();
        if self.email.is_empty() || self.password.is_empty() || self.role.is_none() {
            FILL_ALL_FIELDS_MESSAGE.clone_into(&mut self.error);
            return false;
        }
        self.phase = SessionPhase::Loading;
        true
    }

    /// Called once the login delay elapses.
    pub fn finish_login(&mut self) {
        if self.phase == SessionPhase::Loading {
            self.phase = SessionPhase::Dashboard;
        }
    }

    /// Leave the login form for role selection, dropping everything typed.
    pub fn choose_another_role(&mut self) {
        *self = Self::default();
    }

    /// Log out of the dashboard back to role selection.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// "Login as Retailer"
    #[must_use]
    pub fn login_heading(&self) -> String {
        format!("Login as {}", self.role.map_or("", Role::label))
    }

    /// "Retailer Dashboard"
    #[must_use]
    pub fn dashboard_heading(&self) -> String {
        format!("{} Dashboard", self.role.map_or("", Role::label))
    }
}
