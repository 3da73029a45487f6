//! Table version B: the legacy property key numbering.
//!
//! 175 keys, densely numbered `0..=174`. Predates `kPropertyAccessibilityActionsAssigned`,
//! `kPropertyBackgroundAssigned`, `kPropertyEmbeddedDocument`, `kPropertyHandlePageMove`,
//! `kPropertyOnChildrenChanged`, `kPropertyParameters` and `kPropertyUser`, so every key after
//! the first of those sits at a lower code than in [`crate::tables::current`]. Use
//! [`crate::diff::translate`] to move codes between the two.
//!
//! Only six of those omissions are documented for this version. Leaving out
//! `kPropertyHandlePageMove` as well is inferred from the 175-entry count, not taken from a
//! source table.

property_keys! {
    /// UI component property identifiers shared with the rendering engine.
    version: crate::TableVersion::Legacy;
    ScrollDirection = 0,
    AccessibilityActions = 1,
    AccessibilityLabel = 2,
    Align = 3,
    AlignItems = 4,
    AlignSelf = 5,
    AudioTrack = 6,
    Autoplay = 7,
    Muted = 8,
    BackgroundColor = 9,
    Background = 10,
    BorderBottomLeftRadius = 11,
    BorderBottomRightRadius = 12,
    BorderColor = 13,
    BorderRadius = 14,
    BorderRadii = 15,
    BorderStrokeWidth = 16,
    BorderTopLeftRadius = 17,
    BorderTopRightRadius = 18,
    BorderWidth = 19,
    Bottom = 20,
    Bounds = 21,
    CenterId = 22,
    CenterIndex = 23,
    ChildHeight = 24,
    ChildWidth = 25,
    Checked = 26,
    Color = 27,
    ColorKaraokeTarget = 28,
    ColorNonKaraoke = 29,
    CurrentPage = 30,
    Description = 31,
    Direction = 32,
    Disabled = 33,
    Display = 34,
    DrawnBorderWidth = 35,
    End = 36,
    Entities = 37,
    Environment = 38,
    FastScrollScale = 39,
    Filters = 40,
    FirstId = 41,
    FirstIndex = 42,
    Focusable = 43,
    FontFamily = 44,
    FontSize = 45,
    FontStyle = 46,
    FontWeight = 47,
    HandleTick = 48,
    HighlightColor = 49,
    Hint = 50,
    HintColor = 51,
    HintStyle = 52,
    HintWeight = 53,
    Gestures = 54,
    Graphic = 55,
    Grow = 56,
    HandleKeyDown = 57,
    HandleKeyUp = 58,
    Height = 59,
    Id = 60,
    InitialPage = 61,
    InnerBounds = 62,
    ItemsPerCourse = 63,
    JustifyContent = 64,
    KeyboardBehaviorOnFocus = 65,
    KeyboardType = 66,
    LayoutDirection = 67,
    LayoutDirectionAssigned = 68,
    Left = 69,
    LetterSpacing = 70,
    LineHeight = 71,
    MaxHeight = 72,
    MaxLength = 73,
    MaxLines = 74,
    MaxWidth = 75,
    MediaBounds = 76,
    MediaState = 77,
    MinHeight = 78,
    MinWidth = 79,
    Navigation = 80,
    NextFocusDown = 81,
    NextFocusForward = 82,
    NextFocusLeft = 83,
    NextFocusRight = 84,
    NextFocusUp = 85,
    NotifyChildrenChanged = 86,
    Numbered = 87,
    Numbering = 88,
    OnBlur = 89,
    OnCancel = 90,
    OnDown = 91,
    OnEnd = 92,
    OnFail = 93,
    OnFocus = 94,
    OnLoad = 95,
    OnMount = 96,
    OnMove = 97,
    OnSpeechMark = 98,
    OnPageChanged = 99,
    OnPause = 100,
    OnPlay = 101,
    OnPress = 102,
    OnScroll = 103,
    OnSubmit = 104,
    OnTextChange = 105,
    OnUp = 106,
    OnTimeUpdate = 107,
    OnTrackFail = 108,
    OnTrackReady = 109,
    OnTrackUpdate = 110,
    Opacity = 111,
    OverlayColor = 112,
    OverlayGradient = 113,
    Padding = 114,
    PaddingBottom = 115,
    PaddingEnd = 116,
    PaddingLeft = 117,
    PaddingRight = 118,
    PaddingTop = 119,
    PaddingStart = 120,
    PageDirection = 121,
    PageId = 122,
    PageIndex = 123,
    PlayingState = 124,
    Position = 125,
    Preserve = 126,
    RangeKaraokeTarget = 127,
    ResourceId = 128,
    ResourceOnFatalError = 129,
    ResourceState = 130,
    ResourceType = 131,
    Right = 132,
    Role = 133,
    Scale = 134,
    ScrollAnimation = 135,
    ScrollOffset = 136,
    ScrollPercent = 137,
    ScrollPosition = 138,
    SecureInput = 139,
    SelectOnFocus = 140,
    ShadowColor = 141,
    ShadowHorizontalOffset = 142,
    ShadowRadius = 143,
    ShadowVerticalOffset = 144,
    Shrink = 145,
    Size = 146,
    Snap = 147,
    Source = 148,
    Spacing = 149,
    Speech = 150,
    Start = 151,
    SubmitKeyType = 152,
    Text = 153,
    TextAlign = 154,
    TextAlignAssigned = 155,
    TextAlignVertical = 156,
    Lang = 157,
    TrackCount = 158,
    TrackCurrentTime = 159,
    TrackDuration = 160,
    TrackEnded = 161,
    TrackIndex = 162,
    TrackPaused = 163,
    TrackState = 164,
    Transform = 165,
    TransformAssigned = 166,
    Top = 167,
    Width = 168,
    OnCursorEnter = 169,
    OnCursorExit = 170,
    LaidOut = 171,
    ValidCharacters = 172,
    VisualHash = 173,
    Wrap = 174,
}
