//! Instruction templates sent to the model.
//!
//! Both templates ask for a bare JSON reply with a fixed schema. The user's
//! text is embedded verbatim; it is substituted once, so placeholder-like
//! sequences inside it are left alone.

const INPUT_MARKER: &str = "%INPUT%";

const ANALYSIS_TEMPLATE: &str = r##"Ты - эксперт по кулинарии и диетологии с глубокими знаниями пищевой ценности продуктов и методов приготовления. Проанализируй следующий рецепт блюда и предоставь информацию в строго определенном JSON формате.

Текст рецепта:
%INPUT%

ВАЖНЫЕ ТРЕБОВАНИЯ К АНАЛИЗУ:

1. НАЗВАНИЕ БЛЮДА: Определи точное название блюда на основе рецепта.

2. ИНГРЕДИЕНТЫ: Извлеки ВСЕ ингредиенты с ТОЧНЫМ указанием количества (в граммах, миллилитрах, штуках и т.д.). Если количество не указано, оцени его на основе стандартных порций.

3. РАСЧЕТ КБЖУ (КРИТИЧЕСКИ ВАЖНО):
   - Рассчитай КБЖУ для КАЖДОГО ингредиента с учетом:
     * Точного количества в рецепте
     * Способа приготовления (варка, жарка, запекание и т.д.) - это влияет на калорийность!
     * Изменений при тепловой обработке (испарение воды, впитывание масла и т.д.)
   - Рассчитай ОБЩУЮ массу готового блюда (сумма всех ингредиентов после приготовления)
   - Рассчитай КБЖУ на 100 грамм готового блюда (раздели общие значения на общую массу и умножь на 100)
   - Рассчитай КБЖУ на одну порцию (раздели общие значения на количество порций)
   - Используй актуальные данные о пищевой ценности продуктов
   - Учитывай потери при готовке (испарение, впитывание масла при жарке и т.д.)

4. СЛОЖНОСТЬ ПРИГОТОВЛЕНИЯ:
   - Оцени сложность приготовления блюда по шкале: "Легко", "Средне", "Сложно"
   - Учитывай количество ингредиентов, сложность техник, необходимость специальных навыков
   - "Легко" - простые блюда для начинающих (салаты, простые супы, бутерброды)
   - "Средне" - блюда средней сложности (жареные блюда, запеканки, пироги)
   - "Сложно" - сложные блюда, требующие опыта (многоэтапные блюда, выпечка, сложные соусы)

5. ВРЕМЯ ГОТОВКИ:
   - Укажи общее время приготовления блюда в формате: "X минут" или "X часов Y минут"
   - Учитывай время подготовки ингредиентов, время готовки и время ожидания (маринование, подъем теста и т.д.)
   - Указывай реальное время, которое потребуется для приготовления

6. ПОШАГОВАЯ ИНСТРУКЦИЯ:
   - Разбей процесс на МНОГО мелких шагов (минимум 8-12 шагов для сложных блюд)
   - Пиши ПРОСТЫМ, понятным языком, как будто объясняешь другу
   - Каждый шаг должен быть конкретным и выполнимым
   - Сохраняй техническую суть, но объясняй доступно
   - Указывай точное время, температуру, степень готовности где это важно
   - Включай важные детали (как нарезать, какой огонь, когда помешивать и т.д.)

7. ТЕГИ:
   - Создай 3-7 релевантных тегов для этого рецепта
   - Теги должны отражать: основной ингредиент (мясо, рыба, овощи и т.д.), способ приготовления (жарка, варка, запекание), тип блюда (суп, салат, десерт и т.д.)
   - Используй простые, понятные слова на русском языке
   - Формат тегов: без символа #, только слова (например: ["свинина", "жарка", "второе"])

Верни ответ ТОЛЬКО в формате JSON без дополнительных комментариев:
{
  "dishName": "Название блюда",
  "servings": число_порций,
  "totalWeight": общая_масса_готового_блюда_в_граммах,
  "difficulty": "Легко" или "Средне" или "Сложно",
  "cookingTime": "X минут" или "X часов Y минут",
  "ingredients": [
    "ингредиент 1 с точным количеством",
    "ингредиент 2 с точным количеством"
  ],
  "nutritionPer100g": {
    "calories": число_ккал_на_100г,
    "proteins": число_г_белков_на_100г,
    "fats": число_г_жиров_на_100г,
    "carbs": число_г_углеводов_на_100г
  },
  "nutritionPerServing": {
    "calories": число_ккал_на_порцию,
    "proteins": число_г_белков_на_порцию,
    "fats": число_г_жиров_на_порцию,
    "carbs": число_г_углеводов_на_порцию
  },
  "nutrition": {
    "calories": общее_количество_ккал_в_блюде,
    "proteins": общее_количество_г_белков,
    "fats": общее_количество_г_жиров,
    "carbs": общее_количество_г_углеводов
  },
  "instructions": [
    {
      "step": 1,
      "title": "Краткое название этапа (простыми словами)",
      "description": "Подробное, простое описание этого этапа. Объясняй как другу, но сохраняй точность."
    }
  ],
  "tags": ["тег1", "тег2", "тег3"]
}"##;

const GENERATION_TEMPLATE: &str = r##"Ты - Вита, персональный помощник по рецептам. Пользователь запросил рецепты с учетом следующих требований:
%INPUT%

ВАЖНО: Верни ТОЧНО 2-3 рецепта блюд, которые соответствуют запросу пользователя.

Для КАЖДОГО рецепта предоставь полную информацию в следующем формате:

1. НАЗВАНИЕ БЛЮДА: Точное название блюда

2. ИНГРЕДИЕНТЫ: Все ингредиенты с точным указанием количества

3. РАСЧЕТ КБЖУ:
   - Рассчитай КБЖУ для каждого ингредиента с учетом количества и способа приготовления
   - Рассчитай общую массу готового блюда
   - Рассчитай КБЖУ на 100 грамм готового блюда
   - Рассчитай КБЖУ на одну порцию
   - Учитывай изменения при тепловой обработке

4. СЛОЖНОСТЬ: "Легко", "Средне" или "Сложно"

5. ВРЕМЯ ГОТОВКИ: В формате "X минут" или "X часов Y минут"

6. ПОШАГОВАЯ ИНСТРУКЦИЯ:
   - Разбей на много мелких шагов (минимум 8-12 для сложных блюд)
   - Пиши простым, понятным языком
   - Каждый шаг должен быть конкретным и выполнимым

7. ТЕГИ: 3-7 релевантных тегов (без символа #)

Верни ответ ТОЛЬКО в формате JSON без дополнительных комментариев:
{
  "recipes": [
    {
      "dishName": "Название блюда 1",
      "servings": число_порций,
      "totalWeight": общая_масса_в_граммах,
      "difficulty": "Легко" или "Средне" или "Сложно",
      "cookingTime": "X минут" или "X часов Y минут",
      "ingredients": [
        "ингредиент 1 с количеством",
        "ингредиент 2 с количеством"
      ],
      "nutritionPer100g": {
        "calories": число_ккал_на_100г,
        "proteins": число_г_белков_на_100г,
        "fats": число_г_жиров_на_100г,
        "carbs": число_г_углеводов_на_100г
      },
      "nutritionPerServing": {
        "calories": число_ккал_на_порцию,
        "proteins": число_г_белков_на_порцию,
        "fats": число_г_жиров_на_порцию,
        "carbs": число_г_углеводов_на_порцию
      },
      "nutrition": {
        "calories": общее_количество_ккал,
        "proteins": общее_количество_г_белков,
        "fats": общее_количество_г_жиров,
        "carbs": общее_количество_г_углеводов
      },
      "instructions": [
        {
          "step": 1,
          "title": "Краткое название этапа",
          "description": "Подробное описание этапа"
        }
      ],
      "tags": ["тег1", "тег2", "тег3"]
    },
    {
      "dishName": "Название блюда 2",
      ...
    },
    {
      "dishName": "Название блюда 3",
      ...
    }
  ]
}"##;

fn fill(template: &str, input: &str) -> String {
    template.replacen(INPUT_MARKER, input, 1)
}

/// Prompt asking for a structured nutritional analysis of `recipe_text`.
pub fn analysis_prompt(recipe_text: &str) -> String {
    fill(ANALYSIS_TEMPLATE, recipe_text)
}

/// Prompt asking for two or three recipes matching `query`, wrapped in a
/// `{"recipes": [...]}` object.
pub fn generation_prompt(query: &str) -> String {
    fill(GENERATION_TEMPLATE, query)
}
