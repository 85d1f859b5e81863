use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::profile::application::ports::incoming::use_cases::ProfileUseCase;
use crate::tests::support::stubs::{MockProfileUseCase, StubLoginUserUseCase};
use crate::AppState;

pub struct TestAppStateBuilder {
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    profile: Option<Arc<dyn ProfileUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            profile: Some(Arc::new(MockProfileUseCase::not_found())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user_use_case(
        mut self,
        uc: impl ILoginUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_profile(mut self, uc: impl ProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_user_use_case: self.login_user.expect("login use case configured"),
            profile: self.profile.expect("profile use case configured"),
        })
    }
}
