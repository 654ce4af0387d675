//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuBookOpen as Book, LuBookmark as Bookmark, LuBot as Bot,
        LuBrain as Work, LuCalendar as Calendar, LuCircleAlert as Alert,
        LuCircleCheck as Check, LuClock as Clock, LuCode as Code, LuCoffee as Coffee,
        LuCopy as Copy, LuDownload as Download, LuExternalLink as ExternalLink, LuEye as Eye,
        LuEyeOff as EyeOff, LuFile as File, LuFileText as FileText, LuFlaskConical as Test,
        LuLoaderCircle as Spinner, LuLock as Lock, LuLogOut as LogOut,
        LuMail as Mail, LuMap as Map, LuMenu as Menu, LuMessageCircle as Chat, LuMoon as Moon,
        LuPause as Pause, LuPlay as Play, LuRotateCcw as Reset,
        LuSearch as Search, LuSend as Send, LuSettings as Settings, LuSparkles as Sparkles,
        LuStar as Star, LuSun as Sun, LuTarget as Target, LuTrendingUp as Trend,
        LuTrophy as Trophy, LuUpload as Upload, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsArrowRepeat as Spinner, BsArrowRight as ArrowRight,
        BsBook as Book, BsBookmark as Bookmark, BsBoxArrowRight as LogOut,
        BsBoxArrowUpRight as ExternalLink, BsBriefcase as Work, BsBullseye as Target,
        BsCalendar as Calendar, BsChatDots as Chat, BsCheckCircle as Check, BsClipboard as Copy, BsClipboardCheck as Test,
        BsClock as Clock, BsCodeSlash as Code, BsCupHot as Coffee, BsDownload as Download,
        BsEnvelope as Mail, BsExclamationCircle as Alert, BsEye as Eye, BsEyeSlash as EyeOff,
        BsFileEarmark as File, BsFileEarmarkText as FileText, BsGear as Settings,
        BsGraphUp as Trend, BsList as Menu, BsLock as Lock,
        BsMap as Map, BsMoon as Moon, BsPauseFill as Pause, BsPerson as User,
        BsPlayFill as Play, BsRobot as Bot, BsSearch as Search,
        BsSend as Send, BsStarFill as Star, BsStars as Sparkles, BsSun as Sun,
        BsTrophy as Trophy, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Navigation
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(LOG_OUT, LogOut);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(ARROW_RIGHT, ArrowRight);

// Features
themed_icon!(BOOK, Book);
themed_icon!(CHAT, Chat);
themed_icon!(MAP, Map);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(TEST, Test);
themed_icon!(CODE, Code);
themed_icon!(CALENDAR, Calendar);

// Chat & files
themed_icon!(SEND, Send);
themed_icon!(UPLOAD, Upload);
themed_icon!(FILE, File);
themed_icon!(BOT, Bot);
themed_icon!(USER, User);
themed_icon!(SPINNER, Spinner);
themed_icon!(COPY, Copy);
themed_icon!(DOWNLOAD, Download);

// Status
themed_icon!(CHECK, Check);
themed_icon!(ALERT, Alert);
themed_icon!(TROPHY, Trophy);
themed_icon!(TARGET, Target);
themed_icon!(CLOCK, Clock);
themed_icon!(TREND, Trend);
themed_icon!(STAR, Star);

// Timer
themed_icon!(PLAY, Play);
themed_icon!(PAUSE, Pause);
themed_icon!(RESET, Reset);
themed_icon!(SETTINGS, Settings);
themed_icon!(COFFEE, Coffee);
themed_icon!(WORK, Work);

// Catalogs & forms
themed_icon!(SEARCH, Search);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(EYE, Eye);
themed_icon!(EYE_OFF, EyeOff);
themed_icon!(BOOKMARK, Bookmark);
themed_icon!(MAIL, Mail);
themed_icon!(LOCK, Lock);
