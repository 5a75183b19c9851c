//! Shortcut help overlay.

use leetx_core::Shortcuts;
use leptos::prelude::*;

/// Dismissible list of every shortcut, in table order.
///
/// Clicking the backdrop closes it; clicks inside the panel do not.
#[component]
pub fn HelpOverlay(shortcuts: &'static Shortcuts, visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="leetx-help-backdrop" on:click=move |_| visible.set(false)>
                <div class="leetx-help" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                    <h3>"Keyboard shortcuts"</h3>
                    <table>
                        <tbody>
                            {shortcuts
                                .help_entries()
                                .map(|(combo, label)| {
                                    view! {
                                        <tr>
                                            <td>{label.to_string()}</td>
                                            <td><kbd>{combo.to_string()}</kbd></td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                    <p class="leetx-help-hint">"Click outside to close"</p>
                </div>
            </div>
        </Show>
    }
}
