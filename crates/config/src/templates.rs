//! Per-language response templates
//!
//! Every user-visible string the formatter renders lives here, keyed by
//! language. Languages with partial translations start from the English
//! set and override what they localize, so lookups never miss.
//!
//! Placeholders use `{name}` syntax and are substituted with [`render`].

use std::collections::HashMap;

use commerce_bot_core::Language;
use serde::{Deserialize, Serialize};

/// Template strings for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSet {
    pub welcome: String,
    pub language_menu: String,
    pub invalid_language: String,
    pub greeting_reply: String,
    pub thanks_reply: String,
    pub help: String,
    pub categories_header: String,
    pub search_results_header: String,
    pub price_info: String,
    pub no_results: String,
    pub unknown_reply: String,
    pub empty_message: String,
    pub media_unsupported: String,
    pub error_reply: String,
}

impl TemplateSet {
    pub fn english() -> Self {
        Self {
            welcome: "🛍️ *Welcome to Rose Chemicals!*\n\nPlease select your preferred language:"
                .into(),
            language_menu: "🌐 *Choose Language:*\n\n1️⃣ English\n2️⃣ தமிழ் (Tamil)\n3️⃣ తెలుగు (Telugu)\n4️⃣ ಕನ್ನಡ (Kannada)\n5️⃣ മലയാളം (Malayalam)\n6️⃣ हिंदी (Hindi)\n\nReply with number (1-6)"
                .into(),
            invalid_language: "⚠️ Please select a valid number (1-6)".into(),
            greeting_reply: "Hello! 👋 Welcome to Rose Chemicals!\n\n🛍️ I'm here to help you find the right products.\n\n💡 *Quick commands:*\n• \"Categories\" - Browse all products\n• \"Search [product]\" - Find specific items\n• \"Help\" - Get assistance\n\nWhat can I help you find today?"
                .into(),
            thanks_reply: "You're welcome! 😊\n\nI'm always here to help you find the best products. Feel free to ask anything else!"
                .into(),
            help: "🤖 *How can I help you?*\n\n🛒 *Shopping:*\n• Browse categories\n• Search products\n• Get prices\n\n🔍 *Examples:*\n• \"Show cleaning products\"\n• \"Price of acetic acid\"\n• \"Categories\""
                .into(),
            categories_header: "📂 *Our Categories:*".into(),
            search_results_header: "🔍 Found {count} products for \"{query}\":".into(),
            price_info: "💰 *{name}*\n\n• Price: ₹{price}\n• Category: {category}\n• Code: #{id}"
                .into(),
            no_results: "❌ No products found for \"{query}\"\n\n💡 *Try:*\n• Different keywords\n• Check spelling\n• Browse \"Categories\"\n• Ask \"Help\" for guidance"
                .into(),
            unknown_reply: "🤔 I didn't quite understand that.\n\n💡 *Try:*\n• \"Categories\" - Browse products\n• \"Help\" - Get assistance\n• \"Search [product name]\" - Find items\n\nWhat are you looking for?"
                .into(),
            empty_message: "I received your message, but it appears to be empty. Please send a text message to get started! 😊"
                .into(),
            media_unsupported: "Thank you for sharing media! Currently, I can only process text messages. Please describe what you're looking for in text. 📝"
                .into(),
            error_reply: "Sorry, I encountered an error. Please try again or contact support. 🙏"
                .into(),
        }
    }

    pub fn tamil() -> Self {
        Self {
            welcome: "🛍️ *ரோஸ் கெமிக்கல்ஸ்-க்கு வணக்கம்!*\n\nஉங்கள் விருப்பமான மொழியைத் தேர்ந்தெடுக்கவும்:".into(),
            greeting_reply: "வணக்கம்! 👋 ரோஸ் கெமிக்கல்ஸ்-க்கு வரவேற்கிறோம்!\n\n💡 *விரைவு கட்டளைகள்:*\n• \"வகைகள்\" - அனைத்து பொருட்களும்\n• \"தேடல் [பொருள்]\" - குறிப்பிட்ட பொருட்கள்\n• \"உதவி\" - உதவி பெறுங்கள்\n\nஇன்று நான் என்ன உதவ முடியும்?".into(),
            thanks_reply: "நல்வரவு! 😊\n\nசிறந்த பொருட்களைக் கண்டறிய நான் எப்போதும் இங்கே உள்ளேன். வேறு ஏதாவது கேளுங்கள்!".into(),
            help: "🤖 *எப்படி உதவ முடியும்?*\n\n🛒 *ஷாப்பிங்:*\n• வகைகள் பார்க்கவும்\n• பொருட்கள் தேடவும்\n• விலை பெறவும்".into(),
            categories_header: "📂 *எங்கள் வகைகள்:*".into(),
            search_results_header: "🔍 \"{query}\"-க்கு {count} பொருட்கள் கிடைத்தன:".into(),
            price_info: "💰 *{name}*\n\n• விலை: ₹{price}\n• வகை: {category}\n• குறியீடு: #{id}".into(),
            no_results: "❌ \"{query}\"-க்கு பொருட்கள் இல்லை\n\n💡 *முயற்சிக்கவும்:*\n• வேறு வார்த்தைகள்\n• எழுத்துப்பிழை சரிபார்க்கவும்\n• \"வகைகள்\" பார்க்கவும்".into(),
            unknown_reply: "🤔 அது சரியாக புரியவில்லை.\n\n💡 *முயற்சிக்கவும்:*\n• \"வகைகள்\" - பொருட்கள் பார்க்கவும்\n• \"உதவி\" - உதவி பெறுங்கள்".into(),
            ..Self::english()
        }
    }

    pub fn telugu() -> Self {
        Self {
            welcome: "🛍️ *రోజ్ కెమికల్స్‌కు స్వాగతం!*\n\nమీ ఇష్టమైన భాషను ఎంచుకోండి:".into(),
            greeting_reply: "నమస్కారం! 🛍️ రోజ్ కెమికల్స్‌కు స్వాగతం!\n\n🔍 *అడగవచ్చు:*\n• \"శుభ్రపరిచే వస్తువులు చూపించు\"\n• \"ఎసిటిక్ యాసిడ్ ధర ఎంత?\"\n• \"వర్గాలు\"".into(),
            help: "🤖 *ఎలా సహాయం చేయగలను?*\n\n🛒 *షాపింగ్:*\n• వర్గాలు చూడండి\n• ఉత్పత్తులు వెతకండి\n• ధరలు తెలుసుకోండి".into(),
            categories_header: "📂 *మా వర్గాలు:*".into(),
            search_results_header: "🔍 \"{query}\" కోసం {count} ఉత్పత్తులు దొరికాయి:".into(),
            price_info: "💰 *{name}*\n\n• ధర: ₹{price}\n• వర్గం: {category}\n• కోడ్: #{id}".into(),
            no_results: "❌ \"{query}\" కోసం ఉత్పత్తులు లేవు\n\n💡 *ప్రయత్నించండి:*\n• వేరే పదాలు\n• \"వర్గాలు\" చూడండి\n• \"సహాయం\" అడగండి".into(),
            ..Self::english()
        }
    }

    pub fn kannada() -> Self {
        Self {
            welcome: "🛍️ *ರೋಸ್ ಕೆಮಿಕಲ್ಸ್‌ಗೆ ಸ್ವಾಗತ!*\n\nನಿಮ್ಮ ಆದ್ಯತೆಯ ಭಾಷೆಯನ್ನು ಆಯ್ಕೆಮಾಡಿ:".into(),
            greeting_reply: "ನಮಸ್ಕಾರ! 🛍️ ರೋಸ್ ಕೆಮಿಕಲ್ಸ್‌ಗೆ ಸ್ವಾಗತ!\n\n🔍 *ಕೇಳಬಹುದು:*\n• \"ಸ್ವಚ್ಛಗೊಳಿಸುವ ವಸ್ತುಗಳನ್ನು ತೋರಿಸಿ\"\n• \"ಅಸಿಟಿಕ್ ಆಸಿಡ್ ಬೆಲೆ ಎಷ್ಟು?\"\n• \"ವಿಭಾಗಗಳು\"".into(),
            help: "🤖 *ಹೇಗೆ ಸಹಾಯ ಮಾಡಬಹುದು?*\n\n🛒 *ಶಾಪಿಂಗ್:*\n• ವಿಭಾಗಗಳನ್ನು ನೋಡಿ\n• ಉತ್ಪನ್ನಗಳನ್ನು ಹುಡುಕಿ\n• ಬೆಲೆಗಳನ್ನು ಪಡೆಯಿರಿ".into(),
            categories_header: "📂 *ನಮ್ಮ ವಿಭಾಗಗಳು:*".into(),
            search_results_header: "🔍 \"{query}\" ಗಾಗಿ {count} ಉತ್ಪನ್ನಗಳು ಸಿಕ್ಕಿವೆ:".into(),
            price_info: "💰 *{name}*\n\n• ಬೆಲೆ: ₹{price}\n• ವಿಭಾಗ: {category}\n• ಕೋಡ್: #{id}".into(),
            no_results: "❌ \"{query}\" ಗಾಗಿ ಉತ್ಪನ್ನಗಳು ಇಲ್ಲ\n\n💡 *ಪ್ರಯತ್ನಿಸಿ:*\n• ಬೇರೆ ಪದಗಳು\n• \"ವಿಭಾಗಗಳು\" ನೋಡಿ\n• \"ಸಹಾಯ\" ಕೇಳಿ".into(),
            ..Self::english()
        }
    }

    pub fn malayalam() -> Self {
        Self {
            welcome: "🛍️ *റോസ് കെമിക്കൽസിലേക്ക് സ്വാഗതം!*\n\nനിങ്ങളുടെ ഇഷ്ടമുള്ള ഭാഷ തിരഞ്ഞെടുക്കുക:".into(),
            greeting_reply: "നമസ്കാരം! 🛍️ റോസ് കെമിക്കൽസിലേക്ക് സ്വാഗതം!\n\n🔍 *ചോദിക്കാം:*\n• \"വൃത്തിയാക്കൽ ഉൽപ്പന്നങ്ങൾ കാണിക്കുക\"\n• \"അസിറ്റിക് ആസിഡിന്റെ വില എന്താണ്?\"\n• \"വിഭാഗങ്ങൾ\"".into(),
            help: "🤖 *എങ്ങനെ സഹായിക്കാൻ കഴിയും?*\n\n🛒 *ഷോപ്പിംഗ്:*\n• വിഭാഗങ്ങൾ കാണുക\n• ഉൽപ്പന്നങ്ങൾ തിരയുക\n• വിലകൾ നേടുക".into(),
            categories_header: "📂 *ഞങ്ങളുടെ വിഭാഗങ്ങൾ:*".into(),
            search_results_header: "🔍 \"{query}\" നായി {count} ഉൽപ്പന്നങ്ങൾ കണ്ടെത്തി:".into(),
            price_info: "💰 *{name}*\n\n• വില: ₹{price}\n• വിഭാഗം: {category}\n• കോഡ്: #{id}".into(),
            no_results: "❌ \"{query}\" നായി ഉൽപ്പന്നങ്ങൾ ഇല്ല\n\n💡 *ശ്രമിക്കുക:*\n• വ്യത്യസ്ത പദങ്ങൾ\n• \"വിഭാഗങ്ങൾ\" കാണുക\n• \"സഹായം\" ചോദിക്കുക".into(),
            ..Self::english()
        }
    }

    pub fn hindi() -> Self {
        Self {
            welcome: "🛍️ *रोज़ केमिकल्स में आपका स्वागत है!*\n\nकृपया अपनी पसंदीदा भाषा चुनें:".into(),
            greeting_reply: "नमस्ते! 🛍️ रोज़ केमिकल्स में आपका स्वागत है!\n\n🔍 *पूछ सकते हैं:*\n• \"सफाई के उत्पाद दिखाएं\"\n• \"एसिटिक एसिड की कीमत क्या है?\"\n• \"श्रेणियां\"".into(),
            help: "🤖 *कैसे मदद कर सकते हैं?*\n\n🛒 *खरीदारी:*\n• श्रेणियां देखें\n• उत्पाद खोजें\n• कीमतें जानें".into(),
            categories_header: "📂 *हमारी श्रेणियां:*".into(),
            search_results_header: "🔍 \"{query}\" के लिए {count} उत्पाद मिले:".into(),
            price_info: "💰 *{name}*\n\n• कीमत: ₹{price}\n• श्रेणी: {category}\n• कोड: #{id}".into(),
            no_results: "❌ \"{query}\" के लिए उत्पाद नहीं मिले\n\n💡 *कोशिश करें:*\n• अलग शब्द\n• वर्तनी जांचें\n• \"श्रेणियां\" देखें".into(),
            unknown_reply: "🤔 मैं समझ नहीं पाया।\n\n💡 *कोशिश करें:*\n• \"श्रेणियां\" - उत्पाद देखें\n• \"सहायता\" - मदद लें".into(),
            ..Self::english()
        }
    }
}

/// All template sets, keyed by language
#[derive(Debug, Clone)]
pub struct ResponseTemplates {
    sets: HashMap<Language, TemplateSet>,
}

impl ResponseTemplates {
    /// Templates for a language; English is always present
    pub fn set(&self, language: Language) -> &TemplateSet {
        self.sets
            .get(&language)
            .unwrap_or_else(|| &self.sets[&Language::English])
    }
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        let sets = HashMap::from([
            (Language::English, TemplateSet::english()),
            (Language::Tamil, TemplateSet::tamil()),
            (Language::Telugu, TemplateSet::telugu()),
            (Language::Kannada, TemplateSet::kannada()),
            (Language::Malayalam, TemplateSet::malayalam()),
            (Language::Hindi, TemplateSet::hindi()),
        ]);
        Self { sets }
    }
}

/// Substitute `{name}` placeholders in a template
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_set() {
        let templates = ResponseTemplates::default();
        for lang in Language::all() {
            assert!(!templates.set(*lang).welcome.is_empty());
            assert!(!templates.set(*lang).no_results.is_empty());
        }
    }

    #[test]
    fn test_partial_sets_fall_back_to_english() {
        let templates = ResponseTemplates::default();
        // Telugu does not localize the thanks reply
        assert_eq!(
            templates.set(Language::Telugu).thanks_reply,
            templates.set(Language::English).thanks_reply
        );
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let out = render(
            "Found {count} products for \"{query}\"",
            &[("count", "3"), ("query", "broom")],
        );
        assert_eq!(out, "Found 3 products for \"broom\"");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let out = render("hello {name}", &[("other", "x")]);
        assert_eq!(out, "hello {name}");
    }
}
