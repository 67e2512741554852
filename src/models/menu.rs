//! Menú lateral
//!
//! Once entradas, cada una asociada a exactamente una ruta protegida.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    Home,
    ViewOwners,
    AddOwner,
    ViewVehicles,
    AddVehicle,
    ViewAddresses,
    AddAddress,
    ViewFees,
    AddFee,
    ViewInspections,
    AddInspection,
}

impl MenuItem {
    /// Orden en el que se muestra el menú
    pub const ALL: [MenuItem; 11] = [
        MenuItem::Home,
        MenuItem::ViewOwners,
        MenuItem::AddOwner,
        MenuItem::ViewVehicles,
        MenuItem::AddVehicle,
        MenuItem::ViewAddresses,
        MenuItem::AddAddress,
        MenuItem::ViewFees,
        MenuItem::AddFee,
        MenuItem::ViewInspections,
        MenuItem::AddInspection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Home => "🏠 Home",
            MenuItem::ViewOwners => "👥 View Owners",
            MenuItem::AddOwner => "➕ Add Owner",
            MenuItem::ViewVehicles => "🚗 View Vehicles",
            MenuItem::AddVehicle => "➕ Add Vehicle",
            MenuItem::ViewAddresses => "🏠 View Addresses",
            MenuItem::AddAddress => "➕ Add Address",
            MenuItem::ViewFees => "💵 View Fees",
            MenuItem::AddFee => "➕ Add Fee",
            MenuItem::ViewInspections => "🔍 View Inspections",
            MenuItem::AddInspection => "➕ Add Inspection",
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            MenuItem::AddOwner
            | MenuItem::AddVehicle
            | MenuItem::AddAddress
            | MenuItem::AddFee
            | MenuItem::AddInspection => "POST",
            _ => "GET",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            MenuItem::Home => "/api/home",
            MenuItem::ViewOwners | MenuItem::AddOwner => "/api/owners",
            MenuItem::ViewVehicles | MenuItem::AddVehicle => "/api/vehicles",
            MenuItem::ViewAddresses | MenuItem::AddAddress => "/api/addresses",
            MenuItem::ViewFees | MenuItem::AddFee => "/api/fees",
            MenuItem::ViewInspections | MenuItem::AddInspection => "/api/inspections",
        }
    }
}

/// Entrada del menú tal como se envía al cliente
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    pub item: MenuItem,
    pub label: &'static str,
    pub method: &'static str,
    pub path: &'static str,
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        Self {
            item,
            label: item.label(),
            method: item.method(),
            path: item.path(),
        }
    }
}
