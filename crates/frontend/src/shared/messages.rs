//! Общие тексты интерфейса

pub const SAVED_CHANGES: &str = "Изменения сохранены";
pub const SOMETHING_WENT_WRONG: &str = "Что-то пошло не так";
pub const LOADING: &str = "Загрузка...";
pub const PLACEHOLDER: &str = "...";

pub const SAVE: &str = "Сохранить";
pub const SAVED: &str = "Сохранено";
pub const BACK: &str = "Назад";
pub const CANCEL: &str = "Отмена";
pub const DELETE: &str = "Удалить";
pub const ASSIGN: &str = "Назначить";
pub const UNASSIGN: &str = "Открепить";
pub const LOAD_MORE: &str = "Загрузить ещё";

pub const NOT_FOUND_TITLE: &str = "Страница не найдена";
pub const NOT_FOUND_TEXT: &str =
    "Запрошенный объект не существует или был удалён.";

pub const PAGE_TYPE_REMOVED: &str = "Тип страницы удалён";
pub const ATTRIBUTES_ASSIGNED: &str = "Атрибуты назначены";
pub const ATTRIBUTES_UNASSIGNED: &str = "Атрибуты откреплены";
