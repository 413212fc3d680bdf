//! Navigation Component
//!
//! Header navigation bar with brand and same-page section links.

use leptos::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <a href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💰"</span>
                        <span class="text-xl font-bold text-white">"Finance Tracker"</span>
                    </a>

                    // Section links, handled by the smooth-scroll interceptor
                    <div class="flex items-center space-x-6 text-sm text-gray-300">
                        <a href="#summary" class="hover:text-white">"Summary"</a>
                        <a href="#charts" class="hover:text-white">"Charts"</a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
