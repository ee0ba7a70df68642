use crate::ports::{EdnsView, RecordTableView, ResultViews};
use dnslookup_domain::{DisplayRow, EdnsInfo, EdnsItem, LookupResult, Record, RecordField};
use std::sync::Arc;

/// Record categories of a lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSection {
    Answers,
    Authorities,
    Additional,
}

impl RecordSection {
    /// Columns rendered for the section, in order.
    pub fn fields(&self) -> &'static [RecordField] {
        match self {
            RecordSection::Answers | RecordSection::Additional => &[
                RecordField::Name,
                RecordField::Type,
                RecordField::Ttl,
                RecordField::Address,
                RecordField::Rtt,
            ],
            RecordSection::Authorities => &[
                RecordField::Name,
                RecordField::Type,
                RecordField::Ttl,
                RecordField::Mname,
                RecordField::Rtt,
            ],
        }
    }

    pub fn records<'a>(&self, result: &'a LookupResult) -> Option<&'a [Record]> {
        match self {
            RecordSection::Answers => result.answers.as_deref(),
            RecordSection::Authorities => result.authorities.as_deref(),
            RecordSection::Additional => result.additional.as_deref(),
        }
    }

    pub fn all() -> &'static [RecordSection] {
        &[
            RecordSection::Answers,
            RecordSection::Authorities,
            RecordSection::Additional,
        ]
    }
}

/// Number of rows or items rendered per region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub answers: usize,
    pub authorities: usize,
    pub additional: usize,
    pub edns: usize,
}

/// Projects a lookup result into the four result regions.
pub struct RenderLookupUseCase {
    views: ResultViews,
}

impl RenderLookupUseCase {
    pub fn new(views: ResultViews) -> Self {
        Self { views }
    }

    pub fn execute(&self, result: &LookupResult) -> RenderSummary {
        let mut summary = RenderSummary::default();
        for section in RecordSection::all() {
            let rendered = render_records(
                self.view_for(*section),
                section.records(result),
                section.fields(),
            );
            match section {
                RecordSection::Answers => summary.answers = rendered,
                RecordSection::Authorities => summary.authorities = rendered,
                RecordSection::Additional => summary.additional = rendered,
            }
        }
        summary.edns = render_edns(self.views.edns.as_ref(), result.edns.as_ref());
        summary
    }

    fn view_for(&self, section: RecordSection) -> &dyn RecordTableView {
        let view: &Arc<dyn RecordTableView> = match section {
            RecordSection::Answers => &self.views.answers,
            RecordSection::Authorities => &self.views.authorities,
            RecordSection::Additional => &self.views.additional,
        };
        view.as_ref()
    }
}

fn render_records(
    view: &dyn RecordTableView,
    records: Option<&[Record]>,
    fields: &[RecordField],
) -> usize {
    view.clear_rows();

    let records = match records {
        Some(records) if !records.is_empty() => records,
        _ => {
            view.set_empty_state_visible(true);
            view.set_table_visible(false);
            return 0;
        }
    };

    view.set_empty_state_visible(false);
    view.set_table_visible(true);
    for record in records {
        view.append_row(DisplayRow::project(record, fields));
    }
    records.len()
}

fn render_edns(view: &dyn EdnsView, edns: Option<&EdnsInfo>) -> usize {
    view.clear_items();

    let mut rendered = 0;
    if let Some(edns) = edns {
        for (field, value) in edns.present_fields() {
            view.append_item(EdnsItem::new(field, value));
            rendered += 1;
        }
    }

    view.set_empty_state_visible(rendered == 0);
    rendered
}
