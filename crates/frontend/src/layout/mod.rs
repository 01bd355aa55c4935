pub mod center;
pub mod global_context;
pub mod left;
pub mod pages;
pub mod right;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |    Content    |  RightPanel  |
/// |   (Left)  |   (Center)    |   (Right)    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C, R>(left: L, center: C, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-body">
                <TopHeader />
                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>

            <right::Right>
                {right()}
            </right::Right>
        </div>
    }
}
