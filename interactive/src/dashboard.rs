use commentdeck_shared::{
    ClientConfig, Comment, DashboardModel, PageSize, Route, SortColumn, ViewCommand,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::set_title;
use crate::scope::FetchScope;

/// Comment table with search, sort and pagination.
#[component]
pub fn CommentsDashboard() -> impl IntoView {
    set_title(Route::Dashboard);
    let config = expect_context::<ClientConfig>();
    let model = RwSignal::new(DashboardModel::new());
    let scope = FetchScope::for_screen("dashboard");
    let navigate = use_navigate();

    // Both fetches start on mount and land in whatever order they finish.
    {
        let config = config.clone();
        let scope = scope.clone();
        spawn_local(async move {
            let result = api::fetch_comments(&config, scope.signal()).await;
            if let Some(comments) = scope.settle("comments", result) {
                model.update(|m| m.load_comments(comments));
            }
        });
    }
    spawn_local(async move {
        let result = api::fetch_current_user(&config, scope.signal()).await;
        if let Some(user) = scope.settle("user", result) {
            model.update(|m| m.load_user(user));
        }
    });

    let dispatch = move |command: ViewCommand| {
        model.update(|m| {
            m.apply(command);
        });
    };

    let sort_button = move |column: SortColumn| {
        view! {
            <button
                class="commentdeck-sort"
                class:active=move || model.with(|m| m.view().sort.is_highlighted(column))
                on:click=move |_| dispatch(ViewCommand::ToggleSort(column))
            >
                {column.label()}
                " "
                {move || model.with(|m| m.view().sort.indicator(column))}
            </button>
        }
    };

    let on_page_size = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<PageSize>() {
            Ok(size) => dispatch(ViewCommand::SetPageSize(size)),
            Err(err) => tracing::warn!(%err, "unexpected page size option"),
        }
    };

    let rows = move || {
        model.with(|m| {
            m.current_page()
                .items
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="commentdeck-dashboard">
            <header class="commentdeck-header">
                <h1>"Comments Dashboard"</h1>
                <div class="commentdeck-header-user">
                    {move || {
                        model
                            .with(|m| m.user().cloned())
                            .map(|user| {
                                view! {
                                    <div class="commentdeck-avatar">
                                        {user.initial().map(String::from).unwrap_or_default()}
                                    </div>
                                    <span class="commentdeck-username">{user.name}</span>
                                }
                            })
                    }}
                    <button
                        class="commentdeck-btn"
                        on:click=move |_| navigate(Route::Profile.path(), Default::default())
                    >
                        "Go to Profile Screen"
                    </button>
                </div>
            </header>

            <section class="commentdeck-panel">
                <div class="commentdeck-toolbar">
                    <div class="commentdeck-sorts">
                        {SortColumn::ALL.into_iter().map(sort_button).collect_view()}
                    </div>
                    <input
                        class="commentdeck-input"
                        type="text"
                        placeholder="Search name, email, comment"
                        prop:value=move || model.with(|m| m.view().search.clone())
                        on:input=move |ev| dispatch(ViewCommand::SetSearch(event_target_value(&ev)))
                    />
                </div>

                <table class="commentdeck-table">
                    <thead>
                        <tr>
                            <th>"Post ID"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Comment"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|(index, comment)| (*index, comment.id)
                            children=|(index, comment): (usize, Comment)| {
                                view! {
                                    <tr class="commentdeck-row" class:odd=index % 2 == 1>
                                        <td>{comment.post_id}</td>
                                        <td class="commentdeck-capitalize">{comment.name}</td>
                                        <td>{comment.email}</td>
                                        <td>{comment.body}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                // Pagination
                <div class="commentdeck-pagination">
                    <span class="commentdeck-range">
                        {move || model.with(|m| m.current_page().range_label())}
                    </span>
                    <select
                        class="commentdeck-select"
                        on:change=on_page_size
                    >
                        {PageSize::ALL
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || model.with(|m| m.view().page_size == size)
                                    >
                                        {size.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button
                        class="commentdeck-btn commentdeck-btn-sm"
                        disabled=move || !model.with(|m| m.current_page().has_previous())
                        on:click=move |_| dispatch(ViewCommand::PreviousPage)
                    >
                        "Previous"
                    </button>
                    <button
                        class="commentdeck-btn commentdeck-btn-sm"
                        disabled=move || !model.with(|m| m.current_page().has_next())
                        on:click=move |_| dispatch(ViewCommand::NextPage)
                    >
                        "Next"
                    </button>
                </div>
            </section>
        </div>
    }
}
