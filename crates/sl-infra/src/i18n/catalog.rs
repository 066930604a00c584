use sl_core::i18n::keys;
use sl_core::Locale;

pub(super) fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    match locale {
        Locale::Pt => pt(key),
        Locale::En => en(key),
        Locale::Es => es(key),
    }
}

fn pt(key: &str) -> Option<&'static str> {
    let text = match key {
        keys::WELCOME => "Bem-vindo",
        keys::LOGOUT => "Sair",
        keys::DELETE_ACCOUNT => "Excluir conta",
        keys::CHANGE_PASSWORD => "Alterar senha",
        keys::CANCEL => "Cancelar",
        keys::DELETE => "Excluir",
        keys::ATTENTION => "Atenção",
        keys::ERROR => "Erro",
        keys::SUCCESS => "Sucesso",
        keys::FILL_ALL_FIELDS => "Preencha todos os campos!",
        keys::INVALID_CREDENTIALS => "E-mail ou senha inválidos.",
        keys::SIGN_IN_FAILED => "Erro ao fazer login. Verifique seu e-mail e senha.",
        keys::ENTER_EMAIL_FOR_RESET => "Digite o e-mail para recuperar a senha",
        keys::RESET_EMAIL_SENT => "Enviado e-mail de recuperação",
        keys::RESET_EMAIL_FAILED => "Erro ao enviar e-mail. Verifique se o e-mail está correto.",
        keys::CONFIRM_DELETE_TITLE => "Confirmar exclusão",
        keys::CONFIRM_DELETE_MESSAGE => {
            "Tem certeza que deseja excluir sua conta? Essa ação não pode ser desfeita."
        }
        keys::ACCOUNT_DELETED_TITLE => "Conta excluída",
        keys::ACCOUNT_DELETED => "Sua conta foi excluída com sucesso.",
        keys::NO_USER_SIGNED_IN => "Nenhum usuário logado.",
        keys::DELETE_ACCOUNT_FAILED => "Não foi possível excluir a conta.",
        keys::ITEM_SAVED => "Produto salvo com sucesso.",
        keys::ITEM_SAVE_FAILED => "Não foi possível salvar o produto.",
        keys::ITEMS_LOAD_FAILED => "Não foi possível carregar a lista.",
        keys::ITEM_PLACEHOLDER => "Digite um produto",
        keys::SESSION_REQUIRED => "Faça login para continuar.",
        keys::SIGN_OUT_FAILED => "Não foi possível sair.",
        keys::LANGUAGE_SAVE_FAILED => "Não foi possível salvar o idioma.",
        _ => return None,
    };
    Some(text)
}

fn en(key: &str) -> Option<&'static str> {
    let text = match key {
        keys::WELCOME => "Welcome",
        keys::LOGOUT => "Log out",
        keys::DELETE_ACCOUNT => "Delete account",
        keys::CHANGE_PASSWORD => "Change password",
        keys::CANCEL => "Cancel",
        keys::DELETE => "Delete",
        keys::ATTENTION => "Attention",
        keys::ERROR => "Error",
        keys::SUCCESS => "Success",
        keys::FILL_ALL_FIELDS => "Please fill in all fields!",
        keys::INVALID_CREDENTIALS => "Invalid email or password.",
        keys::SIGN_IN_FAILED => "Sign-in failed. Check your email and password.",
        keys::ENTER_EMAIL_FOR_RESET => "Enter your email to reset the password",
        keys::RESET_EMAIL_SENT => "Password reset email sent",
        keys::RESET_EMAIL_FAILED => "Could not send the email. Check that the address is correct.",
        keys::CONFIRM_DELETE_TITLE => "Confirm deletion",
        keys::CONFIRM_DELETE_MESSAGE => {
            "Are you sure you want to delete your account? This cannot be undone."
        }
        keys::ACCOUNT_DELETED_TITLE => "Account deleted",
        keys::ACCOUNT_DELETED => "Your account was deleted.",
        keys::NO_USER_SIGNED_IN => "No user is signed in.",
        keys::DELETE_ACCOUNT_FAILED => "Could not delete the account.",
        keys::ITEM_SAVED => "Item saved.",
        keys::ITEM_SAVE_FAILED => "Could not save the item.",
        keys::ITEMS_LOAD_FAILED => "Could not load the list.",
        keys::ITEM_PLACEHOLDER => "Type an item",
        keys::SESSION_REQUIRED => "Please sign in to continue.",
        keys::SIGN_OUT_FAILED => "Could not sign out.",
        keys::LANGUAGE_SAVE_FAILED => "Could not save the language.",
        _ => return None,
    };
    Some(text)
}

fn es(key: &str) -> Option<&'static str> {
    let text = match key {
        keys::WELCOME => "Bienvenido",
        keys::LOGOUT => "Cerrar sesión",
        keys::DELETE_ACCOUNT => "Eliminar cuenta",
        keys::CHANGE_PASSWORD => "Cambiar contraseña",
        keys::CANCEL => "Cancelar",
        keys::DELETE => "Eliminar",
        keys::ATTENTION => "Atención",
        keys::ERROR => "Error",
        keys::SUCCESS => "Éxito",
        keys::FILL_ALL_FIELDS => "¡Complete todos los campos!",
        keys::INVALID_CREDENTIALS => "Correo o contraseña no válidos.",
        keys::SIGN_IN_FAILED => "Error al iniciar sesión. Verifique su correo y contraseña.",
        keys::ENTER_EMAIL_FOR_RESET => "Ingrese el correo para recuperar la contraseña",
        keys::RESET_EMAIL_SENT => "Correo de recuperación enviado",
        keys::RESET_EMAIL_FAILED => "Error al enviar el correo. Verifique que sea correcto.",
        keys::CONFIRM_DELETE_TITLE => "Confirmar eliminación",
        keys::CONFIRM_DELETE_MESSAGE => {
            "¿Seguro que desea eliminar su cuenta? Esta acción no se puede deshacer."
        }
        keys::ACCOUNT_DELETED_TITLE => "Cuenta eliminada",
        keys::ACCOUNT_DELETED => "Su cuenta fue eliminada.",
        keys::NO_USER_SIGNED_IN => "No hay ningún usuario conectado.",
        keys::DELETE_ACCOUNT_FAILED => "No se pudo eliminar la cuenta.",
        keys::ITEM_SAVED => "Producto guardado.",
        keys::ITEM_SAVE_FAILED => "No se pudo guardar el producto.",
        keys::ITEMS_LOAD_FAILED => "No se pudo cargar la lista.",
        keys::ITEM_PLACEHOLDER => "Escriba un producto",
        keys::SESSION_REQUIRED => "Inicie sesión para continuar.",
        keys::SIGN_OUT_FAILED => "No se pudo cerrar la sesión.",
        keys::LANGUAGE_SAVE_FAILED => "No se pudo guardar el idioma.",
        _ => return None,
    };
    Some(text)
}
