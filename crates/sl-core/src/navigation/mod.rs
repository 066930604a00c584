use std::fmt;

/// Named screens the navigation service can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Sign-in screen; the entry route.
    Entry,
    /// Shopping list screen.
    List,
    ChangePassword,
    Register,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Entry => "/",
            Route::List => "/HomeScreen",
            Route::ChangePassword => "/AlterarSenha",
            Route::Register => "/CadastrarScreen",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
