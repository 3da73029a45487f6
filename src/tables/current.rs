//! Table version A: the current property key numbering.
//!
//! 182 keys, densely numbered `0..=181`. These codes must match the native engine build
//! this crate is paired with, entry for entry. Never renumber an existing key; append new
//! keys at the end.

property_keys! {
    /// UI component property identifiers shared with the rendering engine.
    version: crate::TableVersion::Current;
    ScrollDirection = 0,
    AccessibilityActions = 1,
    AccessibilityActionsAssigned = 2,
    AccessibilityLabel = 3,
    Align = 4,
    AlignItems = 5,
    AlignSelf = 6,
    AudioTrack = 7,
    Autoplay = 8,
    Muted = 9,
    BackgroundColor = 10,
    BackgroundAssigned = 11,
    Background = 12,
    BorderBottomLeftRadius = 13,
    BorderBottomRightRadius = 14,
    BorderColor = 15,
    BorderRadius = 16,
    BorderRadii = 17,
    BorderStrokeWidth = 18,
    BorderTopLeftRadius = 19,
    BorderTopRightRadius = 20,
    BorderWidth = 21,
    Bottom = 22,
    Bounds = 23,
    CenterId = 24,
    CenterIndex = 25,
    ChildHeight = 26,
    ChildWidth = 27,
    Checked = 28,
    Color = 29,
    ColorKaraokeTarget = 30,
    ColorNonKaraoke = 31,
    CurrentPage = 32,
    Description = 33,
    Direction = 34,
    Disabled = 35,
    Display = 36,
    DrawnBorderWidth = 37,
    EmbeddedDocument = 38,
    End = 39,
    Entities = 40,
    Environment = 41,
    FastScrollScale = 42,
    Filters = 43,
    FirstId = 44,
    FirstIndex = 45,
    Focusable = 46,
    FontFamily = 47,
    FontSize = 48,
    FontStyle = 49,
    FontWeight = 50,
    HandleTick = 51,
    HighlightColor = 52,
    Hint = 53,
    HintColor = 54,
    HintStyle = 55,
    HintWeight = 56,
    Gestures = 57,
    Graphic = 58,
    Grow = 59,
    HandleKeyDown = 60,
    HandleKeyUp = 61,
    Height = 62,
    Id = 63,
    InitialPage = 64,
    InnerBounds = 65,
    ItemsPerCourse = 66,
    JustifyContent = 67,
    KeyboardBehaviorOnFocus = 68,
    KeyboardType = 69,
    LayoutDirection = 70,
    LayoutDirectionAssigned = 71,
    Left = 72,
    LetterSpacing = 73,
    LineHeight = 74,
    MaxHeight = 75,
    MaxLength = 76,
    MaxLines = 77,
    MaxWidth = 78,
    MediaBounds = 79,
    MediaState = 80,
    MinHeight = 81,
    MinWidth = 82,
    Navigation = 83,
    NextFocusDown = 84,
    NextFocusForward = 85,
    NextFocusLeft = 86,
    NextFocusRight = 87,
    NextFocusUp = 88,
    NotifyChildrenChanged = 89,
    Numbered = 90,
    Numbering = 91,
    OnBlur = 92,
    OnCancel = 93,
    OnChildrenChanged = 94,
    OnDown = 95,
    OnEnd = 96,
    OnFail = 97,
    OnFocus = 98,
    OnLoad = 99,
    OnMount = 100,
    OnMove = 101,
    OnSpeechMark = 102,
    HandlePageMove = 103,
    OnPageChanged = 104,
    OnPause = 105,
    OnPlay = 106,
    OnPress = 107,
    OnScroll = 108,
    OnSubmit = 109,
    OnTextChange = 110,
    OnUp = 111,
    OnTimeUpdate = 112,
    OnTrackFail = 113,
    OnTrackReady = 114,
    OnTrackUpdate = 115,
    Opacity = 116,
    OverlayColor = 117,
    OverlayGradient = 118,
    Padding = 119,
    PaddingBottom = 120,
    PaddingEnd = 121,
    PaddingLeft = 122,
    PaddingRight = 123,
    PaddingTop = 124,
    PaddingStart = 125,
    PageDirection = 126,
    PageId = 127,
    PageIndex = 128,
    Parameters = 129,
    PlayingState = 130,
    Position = 131,
    Preserve = 132,
    RangeKaraokeTarget = 133,
    ResourceId = 134,
    ResourceOnFatalError = 135,
    ResourceState = 136,
    ResourceType = 137,
    Right = 138,
    Role = 139,
    Scale = 140,
    ScrollAnimation = 141,
    ScrollOffset = 142,
    ScrollPercent = 143,
    ScrollPosition = 144,
    SecureInput = 145,
    SelectOnFocus = 146,
    ShadowColor = 147,
    ShadowHorizontalOffset = 148,
    ShadowRadius = 149,
    ShadowVerticalOffset = 150,
    Shrink = 151,
    Size = 152,
    Snap = 153,
    Source = 154,
    Spacing = 155,
    Speech = 156,
    Start = 157,
    SubmitKeyType = 158,
    Text = 159,
    TextAlign = 160,
    TextAlignAssigned = 161,
    TextAlignVertical = 162,
    Lang = 163,
    TrackCount = 164,
    TrackCurrentTime = 165,
    TrackDuration = 166,
    TrackEnded = 167,
    TrackIndex = 168,
    TrackPaused = 169,
    TrackState = 170,
    Transform = 171,
    TransformAssigned = 172,
    Top = 173,
    User = 174,
    Width = 175,
    OnCursorEnter = 176,
    OnCursorExit = 177,
    LaidOut = 178,
    ValidCharacters = 179,
    VisualHash = 180,
    Wrap = 181,
}
