//! First live-preview analysis: current files, problems, modernization plan.

use crate::domain::report::{BulletTone, Document, Section};

pub(super) fn document() -> Document {
    Document::titled(
        "ANALIZA SYSTEMU LIVE PREVIEW",
        vec![
            current_files(),
            identified_problems(),
            modernization_plan(),
            performance(),
            expected_results(),
            Section::numbered(
                "KRYTYCZNE ISSUES TO FIX",
                [
                    "Multiple competing live preview systems",
                    "AJAX dependency creating 300ms+ delays",
                    "No error handling or recovery mechanism",
                    "Race conditions between different systems",
                    "Performance degradation with multiple changes",
                    "Broken state when server unavailable",
                ],
            )
            .with_marker("⚡"),
            Section::numbered(
                "IMMEDIATE ACTION ITEMS",
                [
                    "Create unified live preview engine",
                    "Implement CSS Variables approach with AJAX fallback",
                    "Add comprehensive error handling",
                    "Create performance monitoring dashboard",
                    "Add visual feedback for preview states",
                    "Implement proper batching and debouncing",
                ],
            )
            .with_marker("📋"),
            Section::key_values(
                "ARCHITECTURE RECOMMENDATION",
                [
                    ("Primary", "CSS Variables voor instant feedback"),
                    ("Fallback", "Batched AJAX voor complex changes"),
                    ("Recovery", "Local state management with rollback"),
                    ("Monitoring", "Real-time performance metrics"),
                ],
            )
            .with_marker("🔧"),
        ],
    )
}

fn current_files() -> Section {
    Section::subsections(
        "AKTUALNE PLIKI",
        [
            Section::subsections(
                "simple-live-preview.js",
                [
                    Section::key_values(
                        "Overview",
                        [
                            ("Role", "Główny plik live preview"),
                            ("Approach", "AJAX-based CSS injection"),
                        ],
                    ),
                    Section::toned(
                        "Features",
                        BulletTone::Positive,
                        [
                            "Real-time CSS generation via AJAX",
                            "Direct CSS injection via <style> tag",
                            "WordPress Color Picker integration",
                            "Debounced updates (300ms)",
                            "Field tracking przez regex pattern matching",
                        ],
                    ),
                    Section::toned(
                        "Problems",
                        BulletTone::Negative,
                        [
                            "AJAX dependency - slow",
                            "Server roundtrip dla każdej zmiany",
                            "Brak error handling dla failed requests",
                            "Regex pattern matching prone to errors",
                            "No rollback mechanism",
                            "Hard-coded 300ms debounce",
                            "Brak optimizacji dla bulk changes",
                        ],
                    ),
                ],
            ),
            Section::subsections(
                "simple-live-preview-minimal.js",
                [
                    Section::key_values(
                        "Overview",
                        [
                            ("Role", "Alternatywna implementacja"),
                            ("Approach", "CSS Variables direct injection"),
                        ],
                    ),
                    Section::toned(
                        "Features",
                        BulletTone::Positive,
                        [
                            "Direct CSS variable setting",
                            "No server communication",
                            "Instant updates (100ms debounce)",
                            "Minimal dependency approach",
                        ],
                    ),
                    Section::toned(
                        "Problems",
                        BulletTone::Negative,
                        [
                            "Limited to CSS variables tylko",
                            "No complex CSS generation",
                            "Hardcoded variable naming convention",
                            "No fallback dla older browsers",
                            "Brak persistence bez save",
                        ],
                    ),
                ],
            ),
            Section::subsections(
                "mas-settings-form-handler.js",
                [
                    Section::key_values("Overview", [("Role", "Main form handler")]),
                    Section::toned(
                        "Live preview related",
                        BulletTone::Note,
                        [
                            "Ma REST/AJAX fallback system",
                            "Event dispatching system",
                            "Form data collection",
                            "Error handling infrastructure",
                        ],
                    ),
                    Section::toned(
                        "Integration issues",
                        BulletTone::Caution,
                        [
                            "No direct live preview integration",
                            "Separate systems don't communicate",
                            "Potential conflicts with live preview AJAX",
                        ],
                    ),
                ],
            ),
            Section::subsections(
                "admin-settings-page.js",
                [
                    Section::key_values("Overview", [("Role", "UI enhancements")]),
                    Section::toned(
                        "Live preview features",
                        BulletTone::Positive,
                        [
                            "Live preview toggle button",
                            "Theme presets application",
                            "Conditional field showing/hiding",
                            "Slider value updates",
                        ],
                    ),
                    Section::toned(
                        "Problems",
                        BulletTone::Negative,
                        [
                            "Separate live preview implementation",
                            "No coordination with main live preview",
                            "Outdated approach using deprecated events",
                        ],
                    ),
                ],
            ),
        ],
    )
    .with_marker("📁")
}

fn identified_problems() -> Section {
    Section::subsections(
        "GŁÓWNE PROBLEMY",
        [
            Section::toned(
                "ARCHITECTURE",
                BulletTone::Note,
                [
                    "Multiple separate live preview systems",
                    "No unified approach",
                    "AJAX-heavy approach is slow",
                    "No proper error recovery",
                    "Disconnected systems don't communicate",
                ],
            ),
            Section::toned(
                "PERFORMANCE",
                BulletTone::Note,
                [
                    "Server roundtrip dla każdej zmiany",
                    "No batching of changes",
                    "CSS regeneration na serwerze każda zmiana",
                    "No caching mechanisms",
                    "Debounce timers not coordinated",
                ],
            ),
            Section::toned(
                "RELIABILITY",
                BulletTone::Note,
                [
                    "No error handling dla failed requests",
                    "No rollback mechanism",
                    "Broken state gdy server nie odpowiada",
                    "No visual feedback dla errors",
                    "Race conditions możliwe",
                ],
            ),
            Section::toned(
                "USER EXPERIENCE",
                BulletTone::Note,
                [
                    "Delay między zmianą a preview (300ms+)",
                    "No loading indicators",
                    "Inconsistent behavior across fields",
                    "No preview reset option",
                    "Breaking gdy JavaScript errors",
                ],
            ),
            Section::toned(
                "MAINTENANCE",
                BulletTone::Note,
                [
                    "Multiple implementations to maintain",
                    "Hardcoded values and selectors",
                    "Regex-based field detection fragile",
                    "No TypeScript definitions",
                    "Poor separation of concerns",
                ],
            ),
        ],
    )
    .with_marker("🚨")
}

fn modernization_plan() -> Section {
    Section::subsections(
        "PLAN MODERNIZACJI",
        [
            Section::subsections(
                "PHASE 1 IMMEDIATE",
                [
                    Section::toned(
                        "unified_live_preview_engine (assets/js/unified-live-preview.js)",
                        BulletTone::Positive,
                        [
                            "Single live preview system",
                            "Hybrid approach: CSS Variables + AJAX fallback",
                            "Proper error handling and recovery",
                            "Batch updates and debouncing",
                            "Performance monitoring",
                            "Visual feedback system",
                        ],
                    ),
                    Section::toned(
                        "improvements",
                        BulletTone::Action,
                        [
                            "Replace multiple systems with single unified engine",
                            "Add proper error handling and rollback",
                            "Implement performance optimizations",
                            "Add visual feedback indicators",
                            "Create proper field detection system",
                        ],
                    ),
                ],
            ),
            Section::subsections(
                "PHASE 2 OPTIMIZATION",
                [
                    Section::toned(
                        "advanced_features",
                        BulletTone::Action,
                        [
                            "CSS Variables caching system",
                            "Predictive CSS generation",
                            "Background CSS compilation",
                            "Progressive preview loading",
                            "Smart debouncing based on field type",
                        ],
                    ),
                    Section::toned(
                        "performance_features",
                        BulletTone::Action,
                        [
                            "Request batching and coalescing",
                            "CSS diff-based updates",
                            "Service Worker for offline preview",
                            "Memory-efficient CSS injection",
                            "Lazy loading for complex previews",
                        ],
                    ),
                ],
            ),
            Section::subsections(
                "PHASE 3 MODERNIZATION",
                [
                    Section::toned(
                        "modern_architecture",
                        BulletTone::Action,
                        [
                            "TypeScript conversion",
                            "ES6 modules architecture",
                            "Web Components dla preview elements",
                            "State management system",
                            "Event-driven architecture",
                        ],
                    ),
                    Section::toned(
                        "advanced_ui",
                        BulletTone::Action,
                        [
                            "Real-time preview thumbnails",
                            "Undo/redo system",
                            "Preview comparison mode",
                            "Mobile preview mode",
                            "Accessibility preview mode",
                        ],
                    ),
                ],
            ),
        ],
    )
    .with_marker("🚀")
}

fn performance() -> Section {
    Section::subsections(
        "ANALIZA WYDAJNOŚCI",
        [
            Section::key_values(
                "Current approach",
                [
                    ("AJAX roundtrip", "~200-500ms delay"),
                    ("CSS generation", "~50-100ms server time"),
                    ("DOM injection", "~5-10ms"),
                    ("Total delay", "~255-610ms per change"),
                ],
            ),
            Section::key_values(
                "Target improvements",
                [
                    ("CSS Variables direct", "~1-5ms"),
                    ("Batched AJAX fallback", "~100-200ms"),
                    ("Smart caching", "~50% reduction"),
                    ("Total target", "~50-100ms per change"),
                ],
            ),
        ],
    )
    .with_marker("📊")
}

fn expected_results() -> Section {
    Section::key_values(
        "PRZEWIDYWANE REZULTATY",
        [
            ("Performance", "80% faster live preview"),
            ("Reliability", "99.9% uptime with error recovery"),
            ("User Experience", "Instant feedback, smooth interactions"),
            ("Maintainability", "Single system to maintain"),
            ("Scalability", "Handle 100+ concurrent changes"),
            ("Accessibility", "Full keyboard and screen reader support"),
        ],
    )
    .with_marker("🎯")
}
