// ============================================================================
// FILE UPLOAD - Zona de drop + file picker + lista de adjuntos
// ============================================================================
// La lista de StagingState es la fuente de verdad; #fileList se reconstruye
// entera en cada cambio (add / remove / reset).
// ============================================================================

use web_sys::{DragEvent, Element, FileList, HtmlElement, HtmlInputElement};

use crate::dom::{
    append_child, clear_children, get_element_by_id, get_typed_element, on_change, on_click,
    on_drag, set_styles, ElementBuilder,
};
use crate::error::Result;
use crate::models::Attachment;
use crate::state::StagingState;
use crate::utils::{
    DROP_HIGHLIGHT_BACKGROUND, DROP_HIGHLIGHT_BORDER, ERROR_COLOR, FILE_INPUT_ID, FILE_LIST_ID,
    FILE_UPLOAD_ID,
};

const ROW_STYLE: [(&str, &str); 7] = [
    ("display", "flex"),
    ("justify-content", "space-between"),
    ("align-items", "center"),
    ("padding", "0.75rem"),
    ("background", "rgba(255, 255, 255, 0.05)"),
    ("border-radius", "8px"),
    ("margin-bottom", "0.5rem"),
];

const INFO_STYLE: [(&str, &str); 3] = [
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "0.75rem"),
];

const REMOVE_BUTTON_STYLE: [(&str, &str); 7] = [
    ("background", "none"),
    ("border", "none"),
    ("color", ERROR_COLOR),
    ("cursor", "pointer"),
    ("font-size", "1rem"),
    ("padding", "0.25rem"),
    ("border-radius", "4px"),
];

/// Lo que pinta cada fila de #fileList
#[derive(Debug, PartialEq, Clone)]
pub struct FileRow {
    pub index: usize,
    pub icon: &'static str,
    pub name: String,
    pub size: String,
}

/// Filas en el orden de staging; `index` es el que usa el botón de quitar
pub fn file_rows(staging: &StagingState) -> Vec<FileRow> {
    staging
        .snapshot()
        .iter()
        .enumerate()
        .map(|(index, file)| FileRow {
            index,
            icon: file.kind().icon_class(),
            name: file.name.clone(),
            size: file.display_size(),
        })
        .collect()
}

/// Convertir la FileList del navegador
pub fn attachments_from(files: &FileList) -> Vec<Attachment> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| Attachment::new(file.name(), file.size().max(0.0) as u64, file.type_()))
        .collect()
}

pub struct FileUpload {
    zone: HtmlElement,
    input: HtmlInputElement,
    list: Option<Element>,
    staging: StagingState,
}

impl FileUpload {
    /// None si falta la zona o el input. Sin #fileList se acepta igual,
    /// solo que no hay nada que pintar.
    pub fn bind(staging: StagingState) -> Option<Self> {
        Some(Self {
            zone: get_typed_element::<HtmlElement>(FILE_UPLOAD_ID)?,
            input: get_typed_element::<HtmlInputElement>(FILE_INPUT_ID)?,
            list: get_element_by_id(FILE_LIST_ID),
            staging,
        })
    }

    pub fn attach(self) -> Result<()> {
        // Click en la zona -> abrir picker
        let input = self.input.clone();
        on_click(&self.zone, move |_| input.click())?;

        let zone = self.zone.clone();
        on_drag(&self.zone, "dragover", move |e: DragEvent| {
            e.prevent_default();
            highlight(&zone, true);
        })?;

        let zone = self.zone.clone();
        on_drag(&self.zone, "dragleave", move |_| highlight(&zone, false))?;

        let zone = self.zone.clone();
        let staging = self.staging.clone();
        let list = self.list.clone();
        on_drag(&self.zone, "drop", move |e: DragEvent| {
            e.prevent_default();
            highlight(&zone, false);
            let dropped = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(|files| attachments_from(&files))
                .unwrap_or_default();
            log::info!("📎 [UPLOAD] {} archivo(s) soltados", dropped.len());
            stage(&staging, list.as_ref(), dropped);
        })?;

        let input = self.input.clone();
        let staging = self.staging.clone();
        let list = self.list.clone();
        on_change(&self.input, move |_| {
            let picked = input
                .files()
                .map(|files| attachments_from(&files))
                .unwrap_or_default();
            log::info!("📎 [UPLOAD] {} archivo(s) seleccionados", picked.len());
            stage(&staging, list.as_ref(), picked);
            // permitir volver a elegir el mismo archivo
            input.set_value("");
        })?;

        Ok(())
    }
}

fn highlight(zone: &HtmlElement, active: bool) {
    let (border, background) = if active {
        (DROP_HIGHLIGHT_BORDER, DROP_HIGHLIGHT_BACKGROUND)
    } else {
        ("", "")
    };
    if let Err(e) = set_styles(zone, &[("border-color", border), ("background", background)]) {
        log::warn!("⚠️ [UPLOAD] {}", e);
    }
}

fn stage(staging: &StagingState, list: Option<&Element>, files: Vec<Attachment>) {
    if files.is_empty() {
        return;
    }
    staging.add(files);
    log::debug!("📎 [UPLOAD] {} archivo(s) en staging", staging.len());
    refresh(staging, list);
}

fn refresh(staging: &StagingState, list: Option<&Element>) {
    if let Some(list) = list {
        if let Err(e) = render_file_list(list, staging) {
            log::error!("❌ [UPLOAD] Error renderizando lista: {}", e);
        }
    }
}

/// Reconstruir #fileList desde el estado actual
pub fn render_file_list(list: &Element, staging: &StagingState) -> Result<()> {
    clear_children(list);
    for row in file_rows(staging) {
        let row = render_file_row(list, staging, &row)?;
        append_child(list, &row)?;
    }
    Ok(())
}

fn render_file_row(list: &Element, staging: &StagingState, row: &FileRow) -> Result<Element> {
    let icon = ElementBuilder::new("i")?
        .class(row.icon)
        .style(&[("font-size", "1.25rem"), ("color", "#69f0ae")])?
        .build();

    let details = ElementBuilder::new("div")?
        .child(
            ElementBuilder::new("div")?
                .text(&row.name)
                .style(&[("font-weight", "500")])?
                .build(),
        )?
        .child(
            ElementBuilder::new("small")?
                .class("text-muted")
                .text(&row.size)
                .build(),
        )?
        .build();

    let info = ElementBuilder::new("div")?
        .style(&INFO_STYLE)?
        .child(icon)?
        .child(details)?
        .build();

    let remove_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .style(&REMOVE_BUTTON_STYLE)?
        .child(ElementBuilder::new("i")?.class("fas fa-times").build())?
        .build();

    let index = row.index;
    let staging = staging.clone();
    let list = list.clone();
    on_click(&remove_btn, move |e| {
        // el click no debe llegar a la zona de drop (abriría el picker)
        e.stop_propagation();
        if let Some(removed) = staging.remove_at(index) {
            log::info!("🗑️ [UPLOAD] Quitado {}", removed.name);
        }
        refresh(&staging, Some(&list));
    })?;

    Ok(ElementBuilder::new("div")?
        .style(&ROW_STYLE)?
        .child(info)?
        .child(remove_btn)?
        .build())
}

/// Vaciar lista y DOM (reset del formulario)
pub fn clear_file_list(staging: &StagingState) {
    staging.clear();
    if let Some(list) = get_element_by_id(FILE_LIST_ID) {
        clear_children(&list);
    }
}
