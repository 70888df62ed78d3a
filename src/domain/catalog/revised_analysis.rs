//! Revised, more detailed live-preview analysis of the MAS7 plugin.

use crate::domain::report::{BulletTone, Document, Section};

pub(super) fn document() -> Document {
    Document::titled(
        "SZCZEGÓŁOWA ANALIZA SYSTEMU LIVE PREVIEW MAS7",
        vec![
            main_system(),
            minimal_alternative(),
            form_handler(),
            settings_page(),
            Section::numbered(
                "KRYTYCZNE PROBLEMY ZIDENTYFIKOWANE",
                [
                    "4 RÓŻNE live preview implementations w jednej wtyczce",
                    "AJAX bottleneck - każda zmiana = server roundtrip (300ms+)",
                    "ZERO error handling - broken state gdy server nie odpowiada",
                    "Race conditions między różnymi systemami",
                    "Performance degradation przy szybkich zmianach",
                    "Memory leaks - changedSettings nie jest cleared",
                    "Hard-coded values i selectors wszędzie",
                    "Brak unified state management",
                ],
            )
            .with_marker("🚨"),
            performance(),
            modernization_plan(),
            architecture(),
            Section::key_values(
                "SUCCESS METRICS",
                [
                    ("Performance", "< 50ms average preview delay"),
                    ("Reliability", "99.9% success rate z error recovery"),
                    ("User Experience", "Instant feedback, smooth interactions"),
                    ("Maintainability", "Single system, clear separation"),
                    ("Scalability", "Handle 100+ fields without degradation"),
                ],
            )
            .with_marker("🎯"),
            Section::numbered(
                "IMMEDIATE ACTIONS NEEDED",
                [
                    "Stop using 4 different live preview systems",
                    "Create unified live preview engine (unified-live-preview.js)",
                    "Implement proper error handling ASAP",
                    "Add visual feedback voor preview states",
                    "Fix memory leaks w changedSettings",
                    "Coordinate z MAS_Unified_CSS_Manager",
                ],
            )
            .with_marker("⚡"),
            Section::text(
                "CONCLUSION",
                [
                    "Current live preview system needs COMPLETE OVERHAUL",
                    "Multiple competing systems causing conflicts",
                    "Performance is suboptimal (300ms+ delays)",
                    "No error handling = bad user experience",
                    "Unified approach will solve all major issues",
                ],
            )
            .with_marker("💡"),
        ],
    )
}

fn main_system() -> Section {
    Section::subsections(
        "simple-live-preview.js (GŁÓWNY SYSTEM)",
        [
            Section::key_values("Overview", [("Approach", "AJAX-based CSS injection")]),
            Section::toned(
                "Key Features",
                BulletTone::Positive,
                [
                    "Real-time CSS generation poprzez AJAX call",
                    "Direct CSS injection via <style id='mas-v2-live-preview-css'>",
                    "WordPress Color Picker integration",
                    "Debounced updates (300ms timeout)",
                    "Field tracking przez regex pattern matching",
                    "Support for sliders, checkboxes, color pickers",
                ],
            ),
            Section::toned(
                "Problems zidentyfikowane",
                BulletTone::Negative,
                [
                    "AJAX dependency - każda zmiana wymaga server roundtrip",
                    "Brak error handling dla failed AJAX requests",
                    "Regex pattern matching '/\\[([^\\]]+)\\]$/' prone to errors",
                    "No rollback mechanism przy błędach",
                    "Hard-coded 300ms debounce - nie optimized dla różnych field types",
                    "Brak optimizacji dla bulk changes",
                    "changedSettings object nie jest cleared po successful update",
                ],
            ),
        ],
    )
    .with_marker("📁")
}

fn minimal_alternative() -> Section {
    Section::subsections(
        "simple-live-preview-minimal.js (ALTERNATIVE)",
        [
            Section::key_values("Overview", [("Approach", "CSS Variables direct injection")]),
            Section::toned(
                "Key Features",
                BulletTone::Positive,
                [
                    "Direct CSS variable setting poprzez root.style.setProperty()",
                    "No server communication - instant updates",
                    "100ms debounce - szybszy niż main system",
                    "Minimal dependency - tylko document.documentElement",
                ],
            ),
            Section::toned(
                "Problems zidentyfikowane",
                BulletTone::Negative,
                [
                    "Limited to CSS variables only - nie complex CSS generation",
                    "Hard-coded variable naming '--mas-' + setting.replace(/_/g, '-')",
                    "No fallback dla browsers bez CSS variables support",
                    "Brak persistence - zmiany znikają without save",
                    "Limited field type support (tylko colors, heights, widths)",
                ],
            ),
        ],
    )
    .with_marker("📁")
}

fn form_handler() -> Section {
    Section::subsections(
        "mas-settings-form-handler.js (FORM SYSTEM)",
        [
            Section::toned(
                "Live Preview Integration",
                BulletTone::Note,
                [
                    "Ma REST/AJAX fallback infrastructure",
                    "Event dispatching system available",
                    "Form data collection mechanisms",
                    "Error handling infrastructure",
                ],
            ),
            Section::toned(
                "Integration Issues",
                BulletTone::Caution,
                [
                    "No direct live preview integration",
                    "Separate systems nie komunikują się",
                    "Potential conflicts - form handler + live preview AJAX",
                    "Dual handler warnings already identified w kodzie",
                ],
            ),
        ],
    )
    .with_marker("📁")
}

fn settings_page() -> Section {
    Section::subsections(
        "admin-settings-page.js (UI ENHANCEMENTS)",
        [
            Section::toned(
                "Live Preview Related Features",
                BulletTone::Positive,
                [
                    "Live preview toggle button",
                    "Theme presets auto-application",
                    "Conditional field showing/hiding",
                    "Real-time slider value updates",
                ],
            ),
            Section::toned(
                "Problems",
                BulletTone::Negative,
                [
                    "FOURTH separate live preview implementation",
                    "Uses deprecated $(document).on('input.livepreview')",
                    "No coordination z main live preview systems",
                    "setupLivePreviewToggle() conflicts z other systems",
                ],
            ),
        ],
    )
    .with_marker("📁")
}

fn performance() -> Section {
    Section::subsections(
        "ANALIZA WYDAJNOŚCI",
        [
            Section::toned(
                "CURRENT STATE",
                BulletTone::Note,
                [
                    "User change → 300ms debounce → AJAX request → CSS generation → DOM update",
                    "Total delay: ~350-600ms per change",
                    "Server load: High (CSS generation każda zmiana)",
                    "Network: Multiple unnecessary requests",
                    "Memory: Growing changedSettings object",
                ],
            ),
            Section::key_values(
                "PERFORMANCE BOTTLENECKS",
                [
                    ("AJAX roundtrip delay", "200-400ms"),
                    ("Server CSS generation", "50-150ms"),
                    ("DOM style injection", "5-20ms"),
                    ("Debounce waiting", "300ms"),
                    ("Regex pattern matching", "1-5ms per field"),
                ],
            ),
        ],
    )
    .with_marker("📊")
}

fn modernization_plan() -> Section {
    Section::subsections(
        "MODERNIZATION PLAN - 3 PHASES",
        [
            Section::subsections(
                "PHASE 1: IMMEDIATE FIXES (Week 1)",
                [
                    Section::key_values(
                        "Overview",
                        [
                            ("Goal", "Unified system + basic performance"),
                            ("Expected results", "70% faster, 90% more reliable"),
                        ],
                    ),
                    Section::toned(
                        "Tasks",
                        BulletTone::Positive,
                        [
                            "Create unified-live-preview.js - consolidate all 4 systems",
                            "Implement CSS Variables approach voor instant feedback",
                            "Add AJAX fallback tylko dla complex CSS",
                            "Proper error handling z visual feedback",
                            "Smart debouncing based on field type",
                            "Memory management - clear changedSettings",
                        ],
                    ),
                ],
            ),
            Section::subsections(
                "PHASE 2: OPTIMIZATION (Week 2-3)",
                [
                    Section::key_values(
                        "Overview",
                        [
                            ("Goal", "Advanced performance + UX"),
                            ("Expected results", "90% faster, production-ready"),
                        ],
                    ),
                    Section::toned(
                        "Tasks",
                        BulletTone::Action,
                        [
                            "Request batching and coalescing",
                            "CSS diff-based updates (tylko changed parts)",
                            "Background CSS compilation",
                            "Progressive preview loading",
                            "Undo/redo system voor changes",
                            "Preview comparison mode",
                        ],
                    ),
                ],
            ),
            Section::subsections(
                "PHASE 3: MODERNIZATION (Week 4+)",
                [
                    Section::key_values(
                        "Overview",
                        [
                            ("Goal", "Future-proof architecture"),
                            ("Expected results", "Modern, scalable, maintainable"),
                        ],
                    ),
                    Section::toned(
                        "Tasks",
                        BulletTone::Note,
                        [
                            "TypeScript conversion z proper types",
                            "ES6 modules architecture",
                            "Web Components voor preview UI",
                            "State management z Redux/MobX pattern",
                            "WebSocket real-time updates",
                            "Mobile/responsive preview modes",
                        ],
                    ),
                ],
            ),
        ],
    )
    .with_marker("🚀")
}

fn architecture() -> Section {
    Section::subsections(
        "RECOMMENDED ARCHITECTURE",
        [
            Section::tree(
                "UNIFIED LIVE PREVIEW ENGINE",
                [
                    "CSS Variables Layer (instant feedback)",
                    "AJAX Fallback Layer (complex CSS)",
                    "Error Recovery Layer (rollback, retry)",
                    "Performance Layer (batching, caching)",
                    "UI Feedback Layer (loading, errors)",
                ],
            ),
            Section::toned(
                "CORE PRINCIPLES",
                BulletTone::Note,
                [
                    "SINGLE source of truth voor live preview state",
                    "CSS Variables FIRST, AJAX fallback only when needed",
                    "Comprehensive error handling z graceful degradation",
                    "Performance monitoring z automatic optimization",
                    "Modular architecture voor easy maintenance",
                    "Backward compatibility z existing form system",
                ],
            ),
        ],
    )
    .with_marker("🔧")
}
