//! Header menu model.

use serde::Serialize;

use crate::domain::catalog::{
    AccessType, ContainerType, ContractType, EntityType, Location, MovementType, Resource,
};
use crate::domain::user::User;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "target", rename_all = "lowercase")]
pub enum MenuAction {
    Navigate(String),
    Logout,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub icon: Option<&'static str>,
    pub action: Option<MenuAction>,
    pub items: Vec<MenuItem>,
}

impl MenuItem {
    pub fn link(label: impl Into<String>, icon: &'static str, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: Some(icon),
            action: Some(MenuAction::Navigate(route.into())),
            items: Vec::new(),
        }
    }

    pub fn group(label: impl Into<String>, icon: &'static str, items: Vec<MenuItem>) -> Self {
        Self {
            label: label.into(),
            icon: Some(icon),
            action: None,
            items,
        }
    }

    /// Depth-first search by label.
    pub fn find(&self, label: &str) -> Option<&MenuItem> {
        if self.label == label {
            return Some(self);
        }
        self.items.iter().find_map(|item| item.find(label))
    }
}

/// Route of the CRUD page of a resource.
pub fn catalog_route<R: Resource>() -> String {
    format!("/catalogos/{}", R::PATH)
}

fn catalog_link<R: Resource>() -> MenuItem {
    MenuItem::link(R::LABEL, "pi pi-list", catalog_route::<R>())
}

/// Main navigation. Administration entries are only built for managers.
pub fn header_menu(user: &User) -> Vec<MenuItem> {
    let mut menu = vec![
        MenuItem::link("Inicio", "pi pi-home", "/"),
        MenuItem::group(
            "Catálogos",
            "pi pi-book",
            vec![
                catalog_link::<AccessType>(),
                catalog_link::<MovementType>(),
                catalog_link::<ContainerType>(),
                catalog_link::<ContractType>(),
                catalog_link::<EntityType>(),
                catalog_link::<Location>(),
            ],
        ),
    ];

    if user.can_manage() {
        menu.push(MenuItem::group(
            "Administración",
            "pi pi-cog",
            vec![
                MenuItem::link("Usuarios", "pi pi-users", "/admin/usuarios"),
                MenuItem::link("Roles", "pi pi-shield", "/admin/roles"),
            ],
        ));
    }

    menu
}

/// Name shown next to the avatar.
pub fn user_label(user: &User) -> &str {
    match user.email.as_deref() {
        Some(email) if user.nombre.trim().is_empty() => email,
        _ => user.nombre.as_str(),
    }
}

/// Dropdown under the avatar.
pub fn user_menu(user: &User) -> MenuItem {
    MenuItem::group(
        user_label(user),
        "pi pi-user",
        vec![
            MenuItem::link("Mi perfil", "pi pi-id-card", "/perfil"),
            MenuItem {
                label: "Cerrar sesión".to_string(),
                icon: Some("pi pi-sign-out"),
                action: Some(MenuAction::Logout),
                items: Vec::new(),
            },
        ],
    )
}
