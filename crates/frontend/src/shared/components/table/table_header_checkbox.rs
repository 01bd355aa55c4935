//! "Select all" checkbox of the table header
//!
//! ```text
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || selection.with(|s| s.header_state(&visible_ids)))
//!     on_toggle=Callback::new(move |_| toggle_all())
//! />
//! ```

use contracts::shared::selection::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;

/// Header checkbox with three states: unchecked, checked, indeterminate.
///
/// `indeterminate` is a DOM property only, so it is set from an effect.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] state: Signal<HeaderCheckState>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), HeaderCheckState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(is_indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                aria-label="Select all rows on this page"
                prop:checked=move || matches!(state.get(), HeaderCheckState::Checked)
                on:change=move |_| {
                    on_toggle.run(());
                    // The DOM flips `checked` itself; re-sync when the state did not change.
                    if let Some(input) = checkbox_ref.get_untracked() {
                        input.set_checked(matches!(state.get_untracked(), HeaderCheckState::Checked));
                    }
                }
            />
        </TableHeaderCell>
    }
}
