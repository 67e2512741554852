use serde::Serialize;

// Response genérica para operaciones de alta
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

// Un registro junto a su línea formateada para el listado
#[derive(Debug, Serialize)]
pub struct RecordView<T> {
    #[serde(flatten)]
    pub record: T,
    pub display: String,
}

// Listado completo de una entidad, sin filtros ni paginación
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub count: usize,
    pub items: Vec<RecordView<T>>,
}

impl<T> ListResponse<T> {
    pub fn from_records<F>(records: Vec<T>, display: F) -> Self
    where
        F: Fn(&T) -> String,
    {
        let items: Vec<RecordView<T>> = records
            .into_iter()
            .map(|record| {
                let display = display(&record);
                RecordView { record, display }
            })
            .collect();

        Self {
            count: items.len(),
            items,
        }
    }
}

// Opción de un selector (propietario o vehículo)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectOption {
    pub id: i32,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: i32,
        name: &'static str,
    }

    #[test]
    fn test_list_response_flattens_records() {
        let list = ListResponse::from_records(
            vec![Row { id: 1, name: "a" }, Row { id: 2, name: "b" }],
            |r| format!("{} - {}", r.id, r.name),
        );
        assert_eq!(list.count, 2);

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["items"][0]["id"], 1);
        assert_eq!(json["items"][1]["display"], "2 - b");
    }
}
