//! Dashboard and profile screen state.

mod common;

use commentdeck_shared::{
    DashboardModel, PageSize, ProfileModel, SortColumn, ViewCommand, ViewEffect, ViewState,
};
use common::{ids, leanne, twenty_five_comments};
use rstest::{fixture, rstest};

#[fixture]
fn loaded() -> DashboardModel {
    let mut model = DashboardModel::new();
    model.load_comments(twenty_five_comments());
    model
}

#[test]
fn fresh_view_state_defaults() {
    let view = ViewState::default();
    assert_eq!(view.search, "");
    assert_eq!(view.sort.active(), None);
    assert_eq!(view.page, 1);
    assert_eq!(view.page_size, PageSize::Ten);
}

#[test]
fn empty_dashboard_renders_without_data() {
    let model = DashboardModel::new();
    assert!(model.user().is_none());
    let page = model.current_page();
    assert!(page.items.is_empty());
    assert!(!page.has_next());
}

#[rstest]
fn loading_comments_populates_derived_list(loaded: DashboardModel) {
    assert_eq!(loaded.comments().len(), 25);
    assert_eq!(loaded.filtered(), loaded.comments());
    assert_eq!(loaded.current_page().range_label(), "1-10 of 25 items");
}

#[test]
fn comments_arriving_after_search_are_filtered() {
    let mut model = DashboardModel::new();
    model.apply(ViewCommand::SetSearch("test".to_string()));
    model.load_user(leanne());
    model.load_comments(twenty_five_comments());

    assert_eq!(ids(model.filtered()), vec![6, 18]);
    assert_eq!(model.user().map(|u| u.name.as_str()), Some("Leanne Graham"));
}

#[rstest]
fn search_and_sort_request_recompute(mut loaded: DashboardModel) {
    assert_eq!(
        loaded.apply(ViewCommand::SetSearch("laud".to_string())),
        ViewEffect::Recompute
    );
    assert_eq!(
        loaded.apply(ViewCommand::SetSearch("laud".to_string())),
        ViewEffect::None
    );
    assert_eq!(
        loaded.apply(ViewCommand::ToggleSort(SortColumn::Email)),
        ViewEffect::Recompute
    );
    assert_eq!(loaded.filtered()[0].email, "user0@example.com");
}

#[rstest]
fn paging_walks_forward_and_back(mut loaded: DashboardModel) {
    assert_eq!(loaded.apply(ViewCommand::PreviousPage), ViewEffect::None);
    assert_eq!(loaded.apply(ViewCommand::NextPage), ViewEffect::Repaginate);
    assert_eq!(loaded.apply(ViewCommand::NextPage), ViewEffect::Repaginate);
    assert_eq!(loaded.current_page().range_label(), "21-25 of 25 items");
    assert_eq!(loaded.apply(ViewCommand::NextPage), ViewEffect::None);
    assert_eq!(loaded.view().page, 3);

    assert_eq!(loaded.apply(ViewCommand::PreviousPage), ViewEffect::Repaginate);
    assert_eq!(loaded.view().page, 2);
}

#[rstest]
#[case(PageSize::Ten)]
#[case(PageSize::Fifty)]
#[case(PageSize::Hundred)]
fn page_size_change_resets_to_first_page(mut loaded: DashboardModel, #[case] size: PageSize) {
    loaded.apply(ViewCommand::NextPage);
    loaded.apply(ViewCommand::NextPage);

    assert_eq!(loaded.apply(ViewCommand::SetPageSize(size)), ViewEffect::Repaginate);
    assert_eq!(loaded.view().page, 1);
    assert_eq!(loaded.current_page().items[0].id, 1);
}

#[rstest]
fn fifty_per_page_shows_everything(mut loaded: DashboardModel) {
    loaded.apply(ViewCommand::SetPageSize(PageSize::Fifty));
    let page = loaded.current_page();
    assert_eq!(page.items.len(), 25);
    assert_eq!(page.range_label(), "1-25 of 25 items");
    assert!(!page.has_next());
}

/// Search and sort keep the current page, so a narrowing search can leave
/// the view past the end of the shorter list.
#[rstest]
fn search_keeps_current_page(mut loaded: DashboardModel) {
    loaded.apply(ViewCommand::NextPage);
    loaded.apply(ViewCommand::NextPage);

    loaded.apply(ViewCommand::SetSearch("test".to_string()));
    let page = loaded.current_page();
    assert_eq!(page.number, 3);
    assert!(page.items.is_empty());
    assert_eq!(page.range_label(), "21-2 of 2 items");
    assert!(page.has_previous());
    assert!(!page.has_next());

    loaded.apply(ViewCommand::ToggleSort(SortColumn::Name));
    assert_eq!(loaded.view().page, 3);
}

#[test]
fn profile_blocks_until_user_arrives() {
    let mut profile = ProfileModel::default();
    assert!(profile.user().is_none());

    profile.load_user(leanne());
    let user = profile.user().map(|u| (u.initial(), u.address.one_line()));
    assert_eq!(
        user,
        Some((
            Some('L'),
            "Kulas Light, Apt. 556, Gwenborough, 92998-3874".to_string()
        ))
    );
}

#[test]
fn remounting_starts_from_defaults() {
    let mut first = DashboardModel::new();
    first.load_comments(twenty_five_comments());
    first.apply(ViewCommand::SetSearch("test".to_string()));
    first.apply(ViewCommand::ToggleSort(SortColumn::Name));
    drop(first);

    let second = DashboardModel::new();
    assert_eq!(second.view(), &ViewState::default());
    assert!(second.comments().is_empty());
}
